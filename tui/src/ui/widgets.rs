use classifier::Notification;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{layout, theme::Theme};

/// Draws `notice` as a modal over `area`.
pub fn notice(f: &mut Frame, area: Rect, notice: &Notification) {
    let rect = layout::centered_rect(56, 36, area);
    let style = Theme::severity(notice.severity());

    let mut text = Text::from(notice.message());
    text.lines.push(Line::default());
    text.lines.push(Line::from(vec![
        Span::styled("[enter]", Theme::key()),
        Span::styled(" dismiss", Theme::dim()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", notice.title()))
        .title_style(style)
        .title_alignment(Alignment::Center)
        .style(Theme::base());

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .style(Theme::text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        rect,
    );
}

/// Renders key hints on a single centered line.
pub fn hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Theme::key()),
                Span::styled(format!(" {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Draws one labelled entry row.
pub fn field_row(f: &mut Frame, area: Rect, feature: &str, entry: &str, hint: &str, focused: bool) {
    let (name_area, entry_area, hint_area) = layout::field_columns(area);

    let (marker, name_style) = if focused {
        ("▶ ", Theme::highlight())
    } else {
        ("  ", Theme::dim())
    };

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, Theme::key()),
            Span::styled(feature.to_string(), name_style),
        ])),
        name_area,
    );

    let mut spans = vec![Span::styled(entry.to_string(), Theme::text())];
    if focused {
        spans.push(Span::styled("█", Theme::key()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), entry_area);

    f.render_widget(
        Paragraph::new(Span::styled(hint.to_string(), Theme::muted())),
        hint_area,
    );
}
