use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::format::{format_uptime, pad_to, spread};
use crate::ui::gauge::{self, gauge_line};
use crate::ui::theme::Theme;

const COMPACT_BAR_RESERVED: u16 = 10;
const GAUGE_ROWS: u16 = 3;
const FOOTER_TEXT: &str = " [?] Full Help | [ESC] Exit ";

/// Small-terminal view: a title bar, three centered gauges and a hint line.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    cpu_percent: f64,
    ram_percent: f64,
    disk_mbps: f64,
    uptime_secs: u64,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }
    let width = area.width as usize;

    let title = spread(
        " COMPACT MODE ",
        &format!("UPTIME: {} ", format_uptime(uptime_secs)),
        width,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            pad_to(&title, width),
            theme.banner(theme.text_bright, theme.compact_header_bg),
        )),
        Rect { height: 1, ..area },
    );

    let start = (area.height / 2).saturating_sub(GAUGE_ROWS / 2).max(1);
    let gauges_height = GAUGE_ROWS.min(area.height.saturating_sub(start));
    let bar = gauge::bar_width(area.width, COMPACT_BAR_RESERVED);
    let lines = vec![
        gauge_line("CPU", cpu_percent, bar, gauge::CPU, None, theme),
        gauge_line("RAM", ram_percent, bar, gauge::RAM, None, theme),
        gauge_line("DSK", gauge::disk_percent(disk_mbps), bar, gauge::DISK, None, theme),
    ];
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            y: area.y + start,
            height: gauges_height,
            ..area
        },
    );

    if area.height > 1 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                pad_to(FOOTER_TEXT, width),
                theme.banner(theme.menu_fg, theme.menu_bg),
            )),
            Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            },
        );
    }
}
