use ratatui::style::{Color, Modifier, Style};

use crate::model::ProcessSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Auto,
    Color,
    Mono,
}

impl ColorSupport {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "color" | "ansi" | "16" | "256" | "truecolor" => ColorSupport::Color,
            "mono" | "monochrome" | "none" => ColorSupport::Mono,
            _ => ColorSupport::Auto,
        }
    }
}

/// `NO_COLOR` (any non-empty value) turns colors off, see no-color.org.
pub fn detect_color_support() -> ColorSupport {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => ColorSupport::Mono,
        _ => ColorSupport::Color,
    }
}

pub fn resolve_color_support(config: &str) -> ColorSupport {
    let parsed = ColorSupport::from_config_str(config);
    if parsed == ColorSupport::Auto {
        detect_color_support()
    } else {
        parsed
    }
}

/// How a gauge reading compares to its warning and critical thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Crit,
}

/// Coloring class of one process table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    SelfProcess,
    High,
    Medium,
    Normal,
}

impl RowRole {
    pub fn classify(sample: &ProcessSample, self_pid: u32) -> Self {
        if sample.pid == self_pid {
            RowRole::SelfProcess
        } else if sample.cpu_percent > 20.0 || sample.disk_mbps > 5.0 {
            RowRole::High
        } else if sample.cpu_percent > 5.0 || sample.disk_mbps > 1.0 {
            RowRole::Medium
        } else {
            RowRole::Normal
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub text_primary: Color,
    pub text_bright: Color,
    pub border: Color,
    pub header_fg: Color,
    pub compact_header_bg: Color,
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub overlay_fg: Color,
    pub overlay_bg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub severity_ok: Color,
    pub severity_warn: Color,
    pub severity_crit: Color,
    pub row_self: Color,
    pub row_high: Color,
    pub row_medium: Color,
    pub row_normal: Color,
}

impl Theme {
    pub fn from_support(support: ColorSupport) -> Self {
        match support {
            ColorSupport::Mono => Self::mono(),
            ColorSupport::Auto | ColorSupport::Color => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            text_primary: Color::Gray,
            text_bright: Color::White,
            border: Color::DarkGray,
            header_fg: Color::LightCyan,
            compact_header_bg: Color::Blue,
            menu_fg: Color::Black,
            menu_bg: Color::Gray,
            overlay_fg: Color::White,
            overlay_bg: Color::Blue,
            status_ok: Color::LightGreen,
            status_err: Color::LightRed,
            severity_ok: Color::LightGreen,
            severity_warn: Color::Yellow,
            severity_crit: Color::LightRed,
            row_self: Color::LightCyan,
            row_high: Color::LightRed,
            row_medium: Color::Yellow,
            row_normal: Color::Gray,
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            text_primary: Color::Reset,
            text_bright: Color::Reset,
            border: Color::Reset,
            header_fg: Color::Reset,
            compact_header_bg: Color::Reset,
            menu_fg: Color::Reset,
            menu_bg: Color::Reset,
            overlay_fg: Color::Reset,
            overlay_bg: Color::Reset,
            status_ok: Color::Reset,
            status_err: Color::Reset,
            severity_ok: Color::Reset,
            severity_warn: Color::Reset,
            severity_crit: Color::Reset,
            row_self: Color::Reset,
            row_high: Color::Reset,
            row_medium: Color::Reset,
            row_normal: Color::Reset,
        }
    }

    pub fn is_mono(&self) -> bool {
        self.name == "mono"
    }

    /// Solid bar style. Mono has no backgrounds, so it falls back to reverse video.
    pub fn banner(&self, fg: Color, bg: Color) -> Style {
        if self.is_mono() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(fg).bg(bg)
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Ok => self.severity_ok,
            Severity::Warn => self.severity_warn,
            Severity::Crit => self.severity_crit,
        }
    }

    pub fn role_color(&self, role: RowRole) -> Color {
        match role {
            RowRole::SelfProcess => self.row_self,
            RowRole::High => self.row_high,
            RowRole::Medium => self.row_medium,
            RowRole::Normal => self.row_normal,
        }
    }
}
