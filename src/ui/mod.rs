pub mod compact;
pub mod dialog;
pub mod footer;
pub mod gauge;
pub mod header;
pub mod help;
pub mod info;
pub mod table;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::{App, ViewMode};

pub const COMPACT_MAX_WIDTH: u16 = 70;
pub const COMPACT_MAX_HEIGHT: u16 = 18;

/// The one base layout drawn for a given terminal size and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenLayout {
    Help,
    Info,
    Compact,
    FullTable,
}

pub fn select_layout(width: u16, height: u16, view: ViewMode) -> ScreenLayout {
    match view {
        ViewMode::Help => ScreenLayout::Help,
        ViewMode::Info => ScreenLayout::Info,
        ViewMode::Normal | ViewMode::Dialog(_) => {
            if width < COMPACT_MAX_WIDTH || height < COMPACT_MAX_HEIGHT {
                ScreenLayout::Compact
            } else {
                ScreenLayout::FullTable
            }
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match select_layout(area.width, area.height, app.view) {
        ScreenLayout::Help => help::render(frame, area, &app.theme),
        ScreenLayout::Info => info::render(frame, area, &app.theme),
        ScreenLayout::Compact => compact::render(
            frame,
            area,
            app.frame.aggregate_cpu,
            app.memory.ram_percent(),
            app.frame.aggregate_disk,
            app.uptime_secs,
            &app.theme,
        ),
        ScreenLayout::FullTable => {
            let [header_area, _, table_area, menu_area, status_area] = Layout::vertical([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

            header::render(
                frame,
                header_area,
                &app.frame,
                &app.filter,
                &app.memory,
                app.uptime_secs,
                &app.theme,
            );
            table::render(frame, table_area, &app.frame.rows, app.self_pid, &app.theme);
            footer::render_menu(frame, menu_area, app.sort_mode, &app.theme);
            footer::render_status(frame, status_area, app.status_message.as_ref(), &app.theme);
        }
    }

    // Dialog last so it sits on top
    if let Some(kind) = app.dialog_kind() {
        dialog::render(frame, area, kind, &app.dialog_input, &app.theme);
    }
}
