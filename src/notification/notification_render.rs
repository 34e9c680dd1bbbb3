//! Notification rendering
//!
//! Renders live notifications as stacked overlays in the top-right corner
//! of the frame. Fading entries are drawn dimmed until they are swept.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::{NotificationPhase, NotificationState};

/// Height of one notification box (1 line content + 2 borders)
const BOX_HEIGHT: u16 = 3;

/// Narrowest box that still shows borders and padding
const MIN_BOX_WIDTH: u16 = 5;

/// Margin from the frame edges
const MARGIN: u16 = 2;

/// Render all live notifications stacked in the top-right corner
///
/// Expired entries are swept before rendering. Call this after rendering
/// the main UI so the boxes appear on top of other content; when the frame
/// runs out of vertical room the remaining entries are skipped for this
/// frame but stay live.
pub fn render_notifications(frame: &mut Frame, state: &mut NotificationState) {
    state.sweep_expired();

    let frame_area = frame.area();
    let max_width = frame_area.width.saturating_sub(MARGIN * 2);
    let mut y = MARGIN;

    for notif in state.visible() {
        if y + BOX_HEIGHT > frame_area.height.saturating_sub(MARGIN) {
            break;
        }

        // Width: message characters + padding (2 cells each side) + borders
        // (2), clamped between the minimum box and the frame. Character
        // count rather than byte length so multibyte text gets a fitting box.
        let content_width = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
        let width = content_width
            .saturating_add(4)
            .max(MIN_BOX_WIDTH)
            .min(max_width);
        if width < MIN_BOX_WIDTH {
            // Frame itself is too narrow; applies to every entry equally
            break;
        }

        let area = Rect {
            x: frame_area.width.saturating_sub(width + MARGIN),
            y,
            width,
            height: BOX_HEIGHT,
        };

        let mut text_style = Style::default().fg(notif.style.fg).bg(notif.style.bg);
        if notif.phase() == NotificationPhase::Fading {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        // Clear background for floating effect
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(notif.style.border).bg(notif.style.bg))
            .style(Style::default().bg(notif.style.bg));

        let text = Line::from(Span::styled(format!(" {} ", notif.message), text_style));

        frame.render_widget(Paragraph::new(text).block(block), area);

        y += BOX_HEIGHT;
    }
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
