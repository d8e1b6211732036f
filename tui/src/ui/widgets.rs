use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph, Widget, Wrap,
    },
    Frame,
};
use regress_core::optimization::LEARNING_RATE;

use crate::state::{App, Phase, MAX_ITERATIONS};
use crate::ui::theme::Theme;

pub fn header(app: &App) -> Paragraph<'_> {
    let phase_style = Style::default().fg(match app.phase {
        Phase::Idle => Theme::IDLE,
        Phase::Running => Theme::RUNNING,
        Phase::Paused => Theme::PAUSED,
    });

    let line1 = Line::from(vec![
        Span::styled("Linear Regression — Gradient Descent", Theme::title()),
        Span::raw("  |  "),
        Span::styled(app.phase.label(), phase_style),
    ]);

    let elapsed = app.started_at.elapsed();
    let line2 = Line::from(Span::styled(
        format!(
            "optimizer: {}  |  step: {} / {}  |  delay: {} ms  |  points: {}  |  elapsed: {:02}:{:02}",
            app.optimizer_kind().label(),
            app.iteration,
            MAX_ITERATIONS,
            app.step_delay_ms,
            app.dataset().len(),
            elapsed.as_secs() / 60,
            elapsed.as_secs() % 60,
        ),
        Theme::dim(),
    ));

    Paragraph::new(vec![line1, line2])
        .block(Block::default().borders(Borders::ALL).border_style(Theme::border()))
        .wrap(Wrap { trim: true })
}

/// The scatter plot with the fitted line, ground-truth line and residuals.
pub fn plot(app: &App) -> impl Widget + '_ {
    let (x_lo, x_hi) = padded_bounds(app.dataset().x_bounds(), 0.04);
    let (y_lo, y_hi) = padded_bounds(app.dataset().y_bounds(), 0.06);
    let (x_min, x_max) = app.dataset().x_bounds();

    Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Fit ")
                .title_style(Theme::title()),
        )
        .marker(Marker::Braille)
        .x_bounds([x_lo, x_hi])
        .y_bounds([y_lo, y_hi])
        .paint(move |ctx| {
            if app.show_residuals {
                for (x, y) in app.dataset().points() {
                    ctx.draw(&CanvasLine {
                        x1: x as f64,
                        y1: y as f64,
                        x2: x as f64,
                        y2: app.model.predict(x) as f64,
                        color: Theme::RESIDUAL,
                    });
                }
            }

            let (true_slope, true_intercept) = app.ground_truth();
            ctx.draw(&CanvasLine {
                x1: x_min as f64,
                y1: (true_slope * x_min + true_intercept) as f64,
                x2: x_max as f64,
                y2: (true_slope * x_max + true_intercept) as f64,
                color: Theme::TRUTH_LINE,
            });

            ctx.draw(&CanvasLine {
                x1: x_lo,
                y1: app.model.predict(x_lo as f32) as f64,
                x2: x_hi,
                y2: app.model.predict(x_hi as f32) as f64,
                color: Theme::FIT_LINE,
            });

            let coords: Vec<(f64, f64)> = app
                .dataset()
                .points()
                .map(|(x, y)| (x as f64, y as f64))
                .collect();
            ctx.draw(&Points { coords: &coords, color: Theme::POINT });
        })
}

/// Live MSE history. Rendered directly because the chart borrows frame-local data.
pub fn loss_chart(f: &mut Frame, area: Rect, app: &App) {
    let history = app.metrics.mse_history();
    let points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, &m)| (i as f64, m as f64))
        .collect();

    let y_max = history.iter().copied().fold(f32::NEG_INFINITY, f32::max).max(1e-6);
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![ChartDataset::default()
        .name("MSE")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Theme::LOSS))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Loss ")
                .title_style(Theme::title()),
        )
        .x_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("0", Theme::muted()),
                    Span::styled(format!("{}", x_max as usize), Theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Theme::muted())
                .bounds([0.0, y_max as f64])
                .labels(vec![
                    Span::styled("0", Theme::muted()),
                    Span::styled(format!("{y_max:.2}"), Theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

pub fn legend(app: &App) -> Paragraph<'_> {
    let (mse, mae, r2) = app.metrics.current().unwrap_or((0.0, 0.0, 0.0));
    let (true_slope, true_intercept) = app.ground_truth();

    let lines = vec![
        Line::from(vec![
            Span::styled("model  ", Theme::muted()),
            Span::styled(equation(app.model.weight, app.model.bias), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("truth  ", Theme::muted()),
            Span::styled(equation(true_slope, true_intercept), Theme::dim()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("MSE    ", Theme::muted()),
            Span::styled(format!("{mse:.4}"), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("MAE    ", Theme::muted()),
            Span::styled(format!("{mae:.4}"), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("R²     ", Theme::muted()),
            Span::styled(format!("{r2:.4}"), Theme::text()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("opt    ", Theme::muted()),
            Span::styled(
                format!("{} (lr = {LEARNING_RATE})", app.optimizer_kind().label()),
                Theme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("resid  ", Theme::muted()),
            Span::styled(if app.show_residuals { "on" } else { "off" }, Theme::dim()),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Legend ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: true })
}

pub fn footer() -> Paragraph<'static> {
    let hint = |key: &'static str, what: &'static str| {
        [
            Span::styled(key, Theme::dim()),
            Span::styled(what, Theme::muted()),
        ]
    };

    let spans: Vec<Span> = [
        hint("space", " run/pause  "),
        hint("s", " step  "),
        hint("r", " reset  "),
        hint("n", " new data  "),
        hint("1/2/3", " optimizer  "),
        hint("v", " residuals  "),
        hint("f", " legend  "),
        hint("[ ]", " speed  "),
        hint("esc", " quit"),
    ]
    .into_iter()
    .flatten()
    .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn equation(slope: f32, intercept: f32) -> String {
    let sign = if intercept < 0.0 { '-' } else { '+' };
    format!("y = {slope:.3}·x {sign} {:.3}", intercept.abs())
}

fn padded_bounds(bounds: (f32, f32), fraction: f64) -> (f64, f64) {
    let (lo, hi) = (bounds.0 as f64, bounds.1 as f64);
    let range = if hi > lo { hi - lo } else { 1.0 };
    let pad = (range * fraction).max(1e-6);
    (lo - pad, hi + pad)
}
