use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{NotificationKind, NotificationState};

/// Draw the current notification, if any, right-aligned in `area`
pub fn render_notification(frame: &mut Frame, area: Rect, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let style = match notification.kind {
        NotificationKind::Info => Style::default().fg(Color::Green),
        NotificationKind::Warning => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };

    let line = Line::from(Span::styled(format!(" {} ", notification.message), style));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
