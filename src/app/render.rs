use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::App;
use crate::notification::render_notification;
use crate::overlay::SUGGESTION_LINES;
use crate::search::{Category, RankedResult};
use crate::voice::VoiceState;
use crate::widgets::popup;

/// Bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;
/// Room needed below the input before the panel is allowed at all
pub const MIN_PANEL_ROWS: u16 = 4;

const NO_SUGGESTIONS: &str = "No suggestions found";
const SEARCHING: &str = "Searching...";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),            // Category tabs
            Constraint::Length(INPUT_HEIGHT), // Anchor input
            Constraint::Min(0),               // Page body (under the panel)
            Constraint::Length(1),            // Status line
        ])
        .split(frame.area());

        let tabs_area = layout[0];
        let input_area = layout[1];
        let body_area = layout[2];
        let status_area = layout[3];

        self.render_category_tabs(frame, tabs_area);
        self.render_input(frame, input_area);
        self.render_body(frame, body_area);
        self.render_status(frame, status_area);

        // Panel may cover the body but never the status line
        let bounds = Rect {
            height: body_area.bottom().saturating_sub(frame.area().y),
            ..frame.area()
        };
        let panel_area =
            popup::popup_below_anchor(input_area, self.panel_height(), MIN_PANEL_ROWS, bounds);

        self.search.overlay_mut().set_anchor(input_area);
        self.search.overlay_mut().set_host_allows(panel_area.is_some());

        match panel_area {
            Some(area) if self.search.is_overlay_visible() => {
                self.render_suggestions(frame, area);
                self.search.overlay_mut().set_panel(Some(area));
            }
            _ => self.search.overlay_mut().set_panel(None),
        }
    }

    fn panel_height(&self) -> u16 {
        let max = panel_height_for(self.search.controller().max_results());
        panel_height_for(self.search.results().len()).min(max)
    }

    fn render_category_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let selected = Category::ALL
            .iter()
            .position(|c| *c == self.search.category())
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");

        frame.render_widget(tabs, area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.search.overlay().has_focus_intent();
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let mut title = String::from(" Search ");
        if self.search.is_loading() {
            title.push_str("(searching) ");
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        if self.search.voice_supported() {
            let voice = match self.search.voice_state() {
                VoiceState::Listening => Span::styled(
                    " ● listening ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                VoiceState::Idle => Span::styled(" F2 voice ", Style::default().fg(Color::DarkGray)),
            };
            block = block.title(Line::from(voice).right_aligned());
        }

        self.textarea.set_block(block);
        frame.render_widget(&self.textarea, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let hint = Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(" select  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" go  "),
            Span::styled("Ctrl+T", Style::default().fg(Color::Cyan)),
            Span::raw(" category  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" close"),
        ]);
        let body = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(body, popup::inset_rect(area, 1, 1));
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        render_notification(frame, area, &self.notification);
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        popup::clear_area(frame, area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan));
        if self.search.is_loading() {
            block = block.title(Line::from(format!(" {} ", SEARCHING)).right_aligned());
        }

        let content = popup::inset_rect(area, 1, 1);
        let results = self.search.results();

        let lines: Vec<Line> = if results.is_empty() {
            // Only a completed search can claim there is nothing to show
            let message = if self.search.is_loading() {
                Some(SEARCHING)
            } else if self.search.has_searched() {
                Some(NO_SUGGESTIONS)
            } else {
                None
            };
            message
                .map(|m| Line::styled(format!(" {}", m), Style::default().fg(Color::DarkGray)))
                .into_iter()
                .collect()
        } else {
            let selected = self.search.selection().get_selected();
            results
                .iter()
                .enumerate()
                .flat_map(|(i, result)| {
                    suggestion_lines(result, selected == Some(i), content.width as usize)
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Panel height for `suggestions` entries plus borders; one message row when empty
pub fn panel_height_for(suggestions: usize) -> u16 {
    u16::try_from(suggestions.max(1))
        .unwrap_or(u16::MAX)
        .saturating_mul(SUGGESTION_LINES)
        .saturating_add(2)
}

/// The two lines drawn for one suggestion: name row, then type/location row
fn suggestion_lines(result: &RankedResult, selected: bool, width: usize) -> [Line<'static>; 2] {
    let base = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    let marker = if selected { "▶ " } else { "  " };

    let mut badges = String::new();
    if let Some(rating) = result.item.rating {
        badges.push_str(&format!(" ★ {:.1}", rating));
    }
    if result.is_popular() {
        badges.push_str(" · popular");
    }

    let name_width = width.saturating_sub(marker.width() + badges.width());
    let name = truncate_to_width(&result.item.name, name_width);

    let first = Line::from(vec![
        Span::styled(marker, base),
        Span::styled(name, base.add_modifier(Modifier::BOLD)),
        Span::styled(badges, base.fg(if selected { Color::Black } else { Color::Yellow })),
    ]);

    let mut detail = result.item.kind.label().to_string();
    if let Some(location) = &result.item.location {
        detail.push_str(" · ");
        detail.push_str(location);
    }
    let second = Line::from(Span::styled(
        format!("  {}", truncate_to_width(&detail, width.saturating_sub(2))),
        if selected { base } else { base.fg(Color::DarkGray) },
    ));

    [first, second]
}

/// Cut `text` to at most `max_width` display columns, marking the cut with …
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
