use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::format::{format_uptime, spread};
use crate::model::{FilterQuery, FrameView};
use crate::system::snapshot::HostMemory;
use crate::ui::gauge::{self, gauge_line};
use crate::ui::theme::Theme;

/// Columns taken by the label and value text around a full-mode bar.
const FULL_BAR_RESERVED: u16 = 16;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &FrameView,
    filter: &FilterQuery,
    memory: &HostMemory,
    uptime_secs: u64,
    theme: &Theme,
) {
    let [title_area, gauges_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(4)]).areas(area);

    let left = format!(
        " TASKTOOL | VIEW: {}/{} | FILTER: {}",
        view.visible_count,
        view.total_count,
        filter.as_str()
    );
    let right = format!("UPTIME: {} ", format_uptime(uptime_secs));
    let title = Line::styled(
        spread(&left, &right, title_area.width as usize),
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(title), title_area);

    let width = gauge::bar_width(area.width, FULL_BAR_RESERVED);
    let swap_gb = memory.swap_used() as f64 / 1e9;
    let lines = vec![
        gauge_line(
            "CPU",
            view.aggregate_cpu,
            width,
            gauge::CPU,
            Some(format!("{:5.1}%", view.aggregate_cpu)),
            theme,
        ),
        gauge_line(
            "RAM",
            memory.ram_percent(),
            width,
            gauge::RAM,
            Some(format!("{:5.1}%", memory.ram_percent())),
            theme,
        ),
        gauge_line(
            "SWP",
            memory.swap_percent(),
            width,
            gauge::SWAP,
            Some(format!("{swap_gb:5.1}GB")),
            theme,
        ),
        gauge_line(
            "DSK",
            gauge::disk_percent(view.aggregate_disk),
            width,
            gauge::DISK,
            Some(format!("{:5.1}MB", view.aggregate_disk)),
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), gauges_area);
}
