use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::ui::help::{OVERLAY_HEIGHT, OVERLAY_WIDTH, overlay_block, overlay_rect};
use crate::ui::theme::Theme;

pub fn version_line() -> String {
    format!("TaskTool v{}", env!("CARGO_PKG_VERSION"))
}

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay = overlay_rect(area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
    frame.render_widget(Clear, overlay);

    let style = Style::default().fg(theme.text_primary);
    let block = overlay_block("INFO WINDOW", style);
    let inner = block.inner(overlay);

    let lines = vec![
        Line::default(),
        Line::styled(version_line(), style.add_modifier(Modifier::BOLD)).centered(),
        Line::styled("Terminal task manager", style).centered(),
        Line::default(),
        Line::default(),
        Line::styled("[ESC] Return / Exit", style).centered(),
    ];

    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(lines), inner);
}
