use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rect of the given percentages centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

/// Computes the form regions.
///
/// # Returns
/// (model selector, fields, classify button, hints)
pub fn form(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let outer = centered_rect(70, 94, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(outer);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Splits a field row into (name, entry, hint) columns.
pub fn field_columns(area: Rect) -> (Rect, Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Min(12),
            Constraint::Length(22),
        ])
        .split(area);

    (cols[0], cols[1], cols[2])
}
