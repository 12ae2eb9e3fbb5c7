use lane_detector::prelude::EdgeMapBuf;

/// All-false edge mask.
pub fn blank_map(width: usize, height: usize) -> EdgeMapBuf {
    assert!(width > 0 && height > 0, "map dimensions must be positive");
    EdgeMapBuf::new(width, height)
}

/// Mask with a single full-height vertical line of edge pixels at column `x`.
pub fn vertical_line_map(width: usize, height: usize, x: usize) -> EdgeMapBuf {
    assert!(x < width, "line column must lie inside the map");
    let mut map = blank_map(width, height);
    for y in 0..height {
        map.set(x, y, true);
    }
    map
}

/// Paint a full-width horizontal row of edge pixels at row `y`.
pub fn paint_horizontal_row(map: &mut EdgeMapBuf, y: usize) {
    assert!(y < map.height(), "row must lie inside the map");
    for x in 0..map.width() {
        map.set(x, y, true);
    }
}
