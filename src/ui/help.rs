use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::ui::theme::Theme;

pub const OVERLAY_WIDTH: u16 = 40;
pub const OVERLAY_HEIGHT: u16 = 9;

const ENTRIES: [(&str, &str); 5] = [
    ("[F]", "Filter Processes"),
    ("[S]", "Sort (CPU / RAM / DISK)"),
    ("[K]", "Kill Process (by PID)"),
    ("[N]", "New Task (Run app)"),
    ("[ESC]", "Return / Exit"),
];

/// Box of `width` x `height` centered horizontally, with its top edge at
/// `height / 2` lines above the middle of `area`. Shrinks to fit.
pub fn overlay_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height / 2).saturating_sub(height / 2);
    let height = height.min(area.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}

pub fn overlay_block<'a>(title: &'a str, style: Style) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(Line::from(format!(" {title} ")).alignment(Alignment::Center))
        .style(style)
}

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay = overlay_rect(area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
    frame.render_widget(Clear, overlay);

    let style = Style::default().fg(theme.overlay_fg).bg(theme.overlay_bg);
    let block = overlay_block("COMMAND LIST", style);
    let inner = block.inner(overlay);

    let mut lines = vec![Line::default()];
    lines.extend(ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key}"), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {desc}"), style),
        ])
    }));

    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines).style(style), inner);
}
