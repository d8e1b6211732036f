use ratatui::{widgets::Block, Frame};

use crate::state::App;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI for one frame.
///
/// Regions are recomputed from the current frame size, so resizing needs no
/// special handling.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, footer_area) = layout::vertical(area);
    let (plot_col, legend_area) = layout::body(body_area, app.show_legend);
    let (plot_area, chart_area) = layout::plot_column(plot_col);

    f.render_widget(widgets::header(app), header_area);
    f.render_widget(widgets::plot(app), plot_area);
    widgets::loss_chart(f, chart_area, app);

    if let Some(legend) = legend_area {
        f.render_widget(widgets::legend(app), legend);
    }

    f.render_widget(widgets::footer(), footer_area);
}
