use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::{StatusKind, StatusMessage};
use crate::format::pad_to;
use crate::model::SortMode;
use crate::ui::theme::Theme;

pub fn menu_text(sort: SortMode) -> String {
    format!(
        " [F] Filter | [N] New | [K] Kill | [S] Sort: {} | [?] Help | [ESC] Exit",
        sort.label()
    )
}

pub fn render_menu(frame: &mut Frame, area: Rect, sort: SortMode, theme: &Theme) {
    let line = Line::styled(
        pad_to(&menu_text(sort), area.width as usize),
        theme.banner(theme.menu_fg, theme.menu_bg),
    );
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>, theme: &Theme) {
    let Some(status) = status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Ok => theme.status_ok,
        StatusKind::Error => theme.status_err,
    };
    let line = Line::styled(
        format!(" {}", status.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(line), area);
}
