use lane_detector::config::{load_config, DemoConfig};
use lane_detector::diagnostics::{LogOverlay, OverlaySink};
use lane_detector::io::{load_edge_mask, write_json_file};
use lane_detector::publish::{CommandPublisher, JsonLinePublisher};
use lane_detector::LaneDetector;
use std::env;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: DemoConfig = load_config(Path::new(&config_path))?;

    let mut detector = LaneDetector::new(config.detector.clone());
    let stdout = io::stdout();
    let mut publisher = JsonLinePublisher::new(stdout.lock());
    let mut overlay = LogOverlay;

    for (index, path) in config.input.iter().enumerate() {
        let mask = load_edge_mask(path, config.mask_threshold)?;
        let report = match detector.process(mask.as_view()) {
            Ok(report) => report,
            Err(err) => {
                // Skipped frame: the previously published command stays in
                // effect downstream.
                eprintln!("skipping {}: {err}", path.display());
                continue;
            }
        };

        publisher.publish(&report.command)?;
        if let Some(trace) = &report.trace {
            overlay.render(trace);
            if let Some(dir) = &config.trace_dir {
                write_json_file(&dir.join(format!("frame_{index:04}.json")), trace)?;
            }
        }
    }

    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush output: {e}"))?;
    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}
