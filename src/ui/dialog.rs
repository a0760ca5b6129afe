use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::DialogKind;
use crate::ui::help::overlay_rect;
use crate::ui::theme::Theme;

pub const DIALOG_WIDTH: u16 = 50;
pub const DIALOG_HEIGHT: u16 = 5;

/// Tail of `input` that fits in `width` columns, so the cursor stays visible.
fn visible_tail(input: &str, width: usize) -> &str {
    let mut start = 0;
    while input[start..].width() > width {
        match input[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    &input[start..]
}

pub fn render(frame: &mut Frame, area: Rect, kind: DialogKind, input: &str, theme: &Theme) {
    let width = if DIALOG_WIDTH > area.width {
        area.width.saturating_sub(2)
    } else {
        DIALOG_WIDTH
    };
    let dialog = overlay_rect(area, width, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog);

    let style = Style::default().fg(theme.overlay_fg).bg(theme.overlay_bg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(style);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    if inner.width < 2 || inner.height == 0 {
        return;
    }

    let prompt = kind.prompt();
    let room = (inner.width as usize).saturating_sub(1 + prompt.width() + 1);
    let shown = visible_tail(input, room);

    let lines = vec![
        Line::styled(format!(" {}", kind.title()), style.add_modifier(Modifier::BOLD)),
        Line::from(vec![
            Span::styled(format!(" {prompt}"), style),
            Span::styled(shown, style.add_modifier(Modifier::BOLD)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height >= 2 {
        let cursor_x = inner.x + (1 + prompt.width() + shown.width()) as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(inner.right() - 1), inner.y + 1));
    }
}
