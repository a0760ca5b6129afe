use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::{Severity, Theme};

pub const BAR_FILLED: char = '|';
pub const BAR_EMPTY: char = ' ';

/// Aggregate disk throughput drawn as a full bar.
pub const DISK_REFERENCE_MBPS: f64 = 200.0;

pub const MIN_BAR_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub crit: f64,
}

impl Thresholds {
    pub fn severity(&self, percent: f64) -> Severity {
        if percent < self.warn {
            Severity::Ok
        } else if percent < self.crit {
            Severity::Warn
        } else {
            Severity::Crit
        }
    }
}

pub const CPU: Thresholds = Thresholds { warn: 50.0, crit: 80.0 };
pub const RAM: Thresholds = Thresholds { warn: 60.0, crit: 85.0 };
pub const SWAP: Thresholds = Thresholds { warn: 50.0, crit: 80.0 };
pub const DISK: Thresholds = Thresholds { warn: 25.0, crit: 50.0 };

pub fn disk_percent(mbps: f64) -> f64 {
    mbps / DISK_REFERENCE_MBPS * 100.0
}

/// Bar width left after `reserved` columns of label and value text.
pub fn bar_width(total: u16, reserved: u16) -> usize {
    (total.saturating_sub(reserved) as usize).max(MIN_BAR_WIDTH)
}

/// `width` cells, the first `floor(percent / 100 * width)` of them filled.
/// Percent is clamped to `[0, 100]`; NaN counts as 0.
pub fn bar(percent: f64, width: usize) -> String {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    let filled = ((percent / 100.0) * width as f64).floor() as usize;
    let filled = filled.min(width);
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(BAR_FILLED, filled));
    out.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    out
}

/// One ` LBL: [|||   ] value` line. `value` is printed after the bar when given.
pub fn gauge_line(
    label: &str,
    percent: f64,
    width: usize,
    thresholds: Thresholds,
    value: Option<String>,
    theme: &Theme,
) -> Line<'static> {
    let severity = thresholds.severity(percent);
    let mut spans = vec![
        Span::styled(format!(" {label}: "), Style::default().fg(theme.text_primary)),
        Span::styled(
            format!("[{}]", bar(percent, width)),
            Style::default().fg(theme.severity_color(severity)),
        ),
    ];
    if let Some(value) = value {
        spans.push(Span::styled(
            format!(" {value}"),
            Style::default().fg(theme.text_bright),
        ));
    }
    Line::from(spans)
}
