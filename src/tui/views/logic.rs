//! Pricing logic view
//!
//! The step-by-step flow on the left, the algorithm listing on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{ALGORITHM_LISTING, LOGIC_FLOW, LOGIC_GOAL};
use crate::tui::layout::split_columns;

/// Render the logic walkthrough
pub fn render(frame: &mut Frame, area: Rect) {
    let (flow_area, code_area) = split_columns(area, 55);

    let mut lines = vec![
        Line::from(Span::styled(LOGIC_GOAL, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    for (i, step) in LOGIC_FLOW.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, step.name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("   {}", step.detail)));
        if i + 1 < LOGIC_FLOW.len() {
            lines.push(Line::from(Span::styled(
                "   ↓",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let flow = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Dynamic Pricing Logic ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(flow, flow_area);

    let listing: Vec<Line> = ALGORITHM_LISTING.lines().map(Line::from).collect();
    let code = Paragraph::new(listing)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title(" Algorithm ").borders(Borders::ALL));
    frame.render_widget(code, code_area);
}
