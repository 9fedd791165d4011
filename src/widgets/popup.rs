use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly beneath `anchor`, as wide as the anchor, clipped to `bounds`
///
/// Returns None when fewer than `min_height` rows remain below the anchor.
pub fn popup_below_anchor(anchor: Rect, height: u16, min_height: u16, bounds: Rect) -> Option<Rect> {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = bounds.bottom().saturating_sub(popup_y);
    if available < min_height.max(1) {
        return None;
    }

    let popup_x = anchor.x.max(bounds.x);
    Some(Rect {
        x: popup_x,
        y: popup_y,
        width: anchor.width.min(bounds.right().saturating_sub(popup_x)),
        height: height.min(available),
    })
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
