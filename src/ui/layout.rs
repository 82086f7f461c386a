//! Layout helpers

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, shrunk to fit when `area` is smaller
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
