//! Proposed features view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{FEATURES, OBJECTIVE};

/// Render the proposed features overview
pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(OBJECTIVE, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];

    for (i, feature) in FEATURES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                feature.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!("   {}", feature.description)));

        let mut metrics = vec![Span::raw("   ")];
        for metric in feature.metrics {
            metrics.push(Span::styled(
                format!("[{}]", metric),
                Style::default().fg(Color::Magenta),
            ));
            metrics.push(Span::raw(" "));
        }
        lines.push(Line::from(metrics));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Proposed Analytical Features ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
