//! Data analysis view
//!
//! Revenue, conversion and sales charts fed by the chart series, the record
//! table fed by the table rows, and the insights panel.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::display::format_rate;
use crate::models::group_thousands;
use crate::services::ChartPoint;
use crate::tui::app::App;
use crate::tui::layout::AnalysisLayout;

/// Render the analysis view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = AnalysisLayout::new(area);
    let points = app.dashboard.chart_series.points();

    render_summary(frame, app, layout.summary);
    render_revenue_chart(frame, app, &points, layout.revenue_chart);
    render_conversion_chart(frame, &points, layout.conversion_chart);
    render_sales_chart(frame, &points, layout.sales_chart);
    render_record_table(frame, app, layout.table);
    render_insights(frame, app, layout.insights);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();

    let mode = if app.dashboard.chart_series.is_aggregated() {
        "charts sum every category per discount bin"
    } else {
        "charts show this category's records"
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Showing ", Style::default().fg(Color::White)),
        Span::styled(
            app.filter.selector_label(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", mode), Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled("[h/l] Category  [a] All", Style::default().fg(Color::Yellow)),
    ])];

    lines.push(match &app.recommendation {
        Some(rec) => Line::from(vec![
            Span::styled("Optimal discount: ", Style::default().fg(Color::White)),
            Span::styled(
                rec.recommendation.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} revenue · {:.2} per view · {} conversion",
                    rec.projected_revenue.format_grouped(currency),
                    rec.rpv,
                    format_rate(rec.conversion_rate)
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        None => Line::from(Span::styled(
            "No data for this selection",
            Style::default().fg(Color::Yellow),
        )),
    });

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Build a bar chart with one bar per discount bin
fn bar_chart<'a>(title: &'a str, bars: &[Bar<'a>], color: Color) -> BarChart<'a> {
    BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(BarGroup::default().bars(bars))
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

fn render_revenue_chart(frame: &mut Frame, app: &App, points: &[ChartPoint], area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let best = app.recommendation.as_ref().map(|r| r.recommendation);

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            let bar = Bar::default()
                .value(p.revenue.dollars().max(0) as u64)
                .label(Line::from(p.discount_bin.short_label()))
                .text_value(p.revenue.format_grouped(currency));
            if Some(p.discount_bin) == best {
                bar.style(Style::default().fg(Color::Green))
            } else {
                bar
            }
        })
        .collect();

    frame.render_widget(bar_chart(" Revenue ", &bars, Color::Cyan), area);
}

fn render_conversion_chart(frame: &mut Frame, points: &[ChartPoint], area: Rect) {
    // Tenths of a percent keep one decimal of resolution in the bar heights
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value((p.conversion_rate * 10.0).round() as u64)
                .label(Line::from(p.discount_bin.short_label()))
                .text_value(format_rate(p.conversion_rate))
        })
        .collect();

    frame.render_widget(bar_chart(" Conversion Rate ", &bars, Color::Magenta), area);
}

fn render_sales_chart(frame: &mut Frame, points: &[ChartPoint], area: Rect) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.sales)
                .label(Line::from(p.discount_bin.short_label()))
                .text_value(group_thousands(p.sales))
        })
        .collect();

    frame.render_widget(bar_chart(" Sales Volume ", &bars, Color::Yellow), area);
}

fn render_record_table(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let block = Block::default()
        .title(format!(
            " Sample Data Set ({} rows) ",
            app.dashboard.table_rows.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.dashboard.table_rows.is_empty() {
        let text = Paragraph::new("No records match this category.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let rows: Vec<Row> = app
        .dashboard
        .table_rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.category.label()),
                Cell::from(r.discount_bin.label()),
                Cell::from(r.avg_price.format_grouped(currency)),
                Cell::from(group_thousands(r.views)),
                Cell::from(group_thousands(r.sales)),
                Cell::from(r.revenue.format_grouped(currency)).style(Style::default().fg(Color::Green)),
                Cell::from(format_rate(r.conversion_rate)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),    // Category
        Constraint::Length(16), // Discount bin
        Constraint::Length(9),  // Avg price
        Constraint::Length(7),  // Views
        Constraint::Length(6),  // Sales
        Constraint::Length(9),  // Revenue
        Constraint::Length(6),  // Conversion
    ];

    let header = Row::new(vec![
        "Category", "Discount", "Price", "Views", "Sales", "Revenue", "Conv.",
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_insights(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let mut lines = Vec::new();

    for (title, body) in app.insights.sections(currency) {
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(body));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from("No data for this selection."));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Insights ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
