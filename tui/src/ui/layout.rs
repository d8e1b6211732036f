use ratatui::layout::{Constraint, Direction, Layout, Rect};

const LEGEND_WIDTH: u16 = 36;
const CHART_HEIGHT: u16 = 10;

/// Computes the main regions.
///
/// # Returns
/// (header, body, footer)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits the body into (plot column, legend_opt).
pub fn body(area: Rect, show_legend: bool) -> (Rect, Option<Rect>) {
    if !show_legend {
        return (area, None);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(LEGEND_WIDTH)])
        .split(area);

    (cols[0], Some(cols[1]))
}

/// Splits the plot column into (canvas, loss chart).
pub fn plot_column(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(CHART_HEIGHT)])
        .split(area);

    (rows[0], rows[1])
}
