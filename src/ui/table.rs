use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::format::truncate_unicode;
use crate::model::ProcessSample;
use crate::ui::theme::{RowRole, Theme};

pub const PID_WIDTH: u16 = 8;
pub const CPU_WIDTH: u16 = 8;
pub const RAM_WIDTH: u16 = 10;
pub const DISK_WIDTH: u16 = 10;
pub const MIN_NAME_WIDTH: u16 = 5;

const COLUMN_SPACING: u16 = 1;
/// Borders plus the gaps between the five columns.
const CHROME_WIDTH: u16 = 2 + 4 * COLUMN_SPACING;
/// Top and bottom border, header row and its separator.
const CHROME_HEIGHT: u16 = 4;

pub fn name_width(total: u16) -> u16 {
    total
        .saturating_sub(PID_WIDTH + CPU_WIDTH + RAM_WIDTH + DISK_WIDTH + CHROME_WIDTH)
        .max(MIN_NAME_WIDTH)
}

/// Data rows that fit in a table of `height` lines.
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_HEIGHT) as usize
}

pub fn render(frame: &mut Frame, area: Rect, rows: &[ProcessSample], self_pid: u32, theme: &Theme) {
    let name_width = name_width(area.width);

    let header = Row::new(["PID", "CPU%", "RAM", "DSK", "NAME"].map(|title| {
        Cell::from(format!(" {title}"))
    }))
    .style(
        Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let body = rows.iter().take(visible_rows(area.height)).map(|sample| {
        let role = RowRole::classify(sample, self_pid);
        let mut style = Style::default().fg(theme.role_color(role));
        if theme.is_mono() && role != RowRole::Normal {
            style = style.add_modifier(Modifier::BOLD);
        }
        Row::new([
            Cell::from(format!(" {:>6}", sample.pid)),
            Cell::from(format!(" {:>5.1}%", sample.cpu_percent)),
            Cell::from(format!(" {:>8}", sample.working_set_mb)),
            Cell::from(format!(" {:>8.1}", sample.disk_mbps)),
            Cell::from(format!(
                " {}",
                truncate_unicode(&sample.name, name_width.saturating_sub(1) as usize)
            )),
        ])
        .style(style)
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(PID_WIDTH),
            Constraint::Length(CPU_WIDTH),
            Constraint::Length(RAM_WIDTH),
            Constraint::Length(DISK_WIDTH),
            Constraint::Min(MIN_NAME_WIDTH),
        ],
    )
    .header(header)
    .column_spacing(COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    frame.render_widget(table, area);
}
