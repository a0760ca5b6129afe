use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::config::Config;
use crate::model::{FilterQuery, FrameView, ProcessSample, SortMode};
use crate::system::Backend;
use crate::system::control::{KillResult, LaunchResult};
use crate::system::metrics::MetricEngine;
use crate::system::snapshot::HostMemory;
use crate::ui::theme::{Theme, resolve_color_support};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Filter,
    Kill,
    NewTask,
}

impl DialogKind {
    pub fn title(self) -> &'static str {
        match self {
            DialogKind::Filter => "FILTER ENGINE (ESC to Cancel):",
            DialogKind::Kill => "KILL PROCESS (ESC to Cancel):",
            DialogKind::NewTask => "RUN NEW TASK (ESC to Cancel):",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            DialogKind::Filter => "Query > ",
            DialogKind::Kill => "PID > ",
            DialogKind::NewTask => "Name > ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Normal,
    Help,
    Info,
    Dialog(DialogKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created: Instant,
}

/// Remembers the size and view of the last frame so the loop knows when the
/// whole screen has to be cleared before drawing.
#[derive(Debug, Default)]
pub struct RedrawTracker {
    last: Option<(u16, u16, ViewMode)>,
}

impl RedrawTracker {
    pub fn needs_clear(&mut self, width: u16, height: u16, view: ViewMode) -> bool {
        let current = Some((width, height, view));
        let changed = self.last != current;
        self.last = current;
        changed
    }
}

pub fn parse_pid(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

pub struct App {
    pub running: bool,
    backend: Box<dyn Backend>,
    metrics: MetricEngine,
    samples: Vec<ProcessSample>,
    pub frame: FrameView,
    pub memory: HostMemory,
    pub uptime_secs: u64,
    pub view: ViewMode,
    pub dialog_input: String,
    pub filter: FilterQuery,
    pub sort_mode: SortMode,
    pub status_message: Option<StatusMessage>,
    status_timeout: Duration,
    pub theme: Theme,
    pub self_pid: u32,
    pub redraw: RedrawTracker,
}

impl App {
    pub fn new(config: &Config, backend: Box<dyn Backend>) -> Self {
        let general = &config.general;
        let theme = Theme::from_support(resolve_color_support(&general.color_support));

        let mut app = App {
            running: true,
            backend,
            metrics: MetricEngine::new(),
            samples: Vec::new(),
            frame: FrameView::default(),
            memory: HostMemory::default(),
            uptime_secs: 0,
            view: ViewMode::Normal,
            dialog_input: String::new(),
            filter: FilterQuery::new(general.default_filter.clone()),
            sort_mode: SortMode::from_str_config(&general.default_sort),
            status_message: None,
            status_timeout: Duration::from_secs(general.status_timeout_secs),
            theme,
            self_pid: std::process::id(),
            redraw: RedrawTracker::default(),
        };
        app.refresh_data();
        app
    }

    pub fn refresh_data(&mut self) {
        let snapshot = self.backend.snapshot();
        self.samples = self.metrics.sample_all(&snapshot.processes);
        self.memory = snapshot.memory;
        self.uptime_secs = snapshot.uptime_secs;
        self.rebuild_frame();
        self.expire_status();
    }

    /// Sampling stays frozen while a dialog owns the input.
    pub fn on_tick(&mut self) {
        if self.dialog_kind().is_some() {
            self.expire_status();
            return;
        }
        self.refresh_data();
    }

    fn rebuild_frame(&mut self) {
        self.frame = FrameView::build(&self.samples, &self.filter, self.sort_mode);
    }

    fn expire_status(&mut self) {
        if let Some(status) = &self.status_message
            && status.created.elapsed() >= self.status_timeout
        {
            self.status_message = None;
        }
    }

    pub fn dialog_kind(&self) -> Option<DialogKind> {
        match self.view {
            ViewMode::Dialog(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if let ViewMode::Dialog(_) = self.view {
            // AltGr arrives as Ctrl+Alt on Windows, so dialogs keep modified chars.
            return Self::map_key_dialog(key);
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }

        match self.view {
            ViewMode::Help | ViewMode::Info => Self::map_key_overlay(key),
            _ => Self::map_key_normal(key),
        }
    }

    fn map_key_normal(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(c) => match c.to_ascii_uppercase() {
                'F' => Action::OpenDialog(DialogKind::Filter),
                'K' => Action::OpenDialog(DialogKind::Kill),
                'N' => Action::OpenDialog(DialogKind::NewTask),
                'S' => Action::CycleSortMode,
                'I' => Action::ShowInfo,
                '?' | 'H' => Action::ShowHelp,
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn map_key_overlay(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseOverlay,
            KeyCode::Char(c) if matches!(c.to_ascii_uppercase(), '?' | 'H' | 'I') => {
                Action::CloseOverlay
            }
            _ => Action::None,
        }
    }

    fn map_key_dialog(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::DialogCancel,
            KeyCode::Enter => Action::DialogCommit,
            KeyCode::Backspace => Action::DialogBackspace,
            KeyCode::Char(c) if !c.is_control() => Action::DialogInput(c),
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::OpenDialog(kind) => {
                self.dialog_input.clear();
                self.view = ViewMode::Dialog(kind);
            }
            Action::CycleSortMode => {
                self.sort_mode = self.sort_mode.next();
                self.rebuild_frame();
            }
            Action::ShowHelp => self.view = ViewMode::Help,
            Action::ShowInfo => self.view = ViewMode::Info,
            Action::CloseOverlay => self.view = ViewMode::Normal,
            Action::DialogInput(c) => self.dialog_input.push(c),
            Action::DialogBackspace => {
                self.dialog_input.pop();
            }
            Action::DialogCancel => {
                self.dialog_input.clear();
                self.view = ViewMode::Normal;
            }
            Action::DialogCommit => {
                if let Some(kind) = self.dialog_kind() {
                    self.commit_dialog(kind);
                }
            }
            Action::None => {}
        }
    }

    fn commit_dialog(&mut self, kind: DialogKind) {
        let text = std::mem::take(&mut self.dialog_input);
        self.view = ViewMode::Normal;
        if text.is_empty() {
            return;
        }

        match kind {
            DialogKind::Filter => {
                info!(filter = %text, "filter updated");
                self.filter = FilterQuery::new(text);
                self.rebuild_frame();
            }
            DialogKind::Kill => match parse_pid(&text) {
                Some(pid) => {
                    let result = self.backend.terminate(pid);
                    self.set_kill_status(result);
                }
                None => debug!(input = %text, "ignoring non-numeric pid"),
            },
            DialogKind::NewTask => {
                let result = self.backend.launch(&text);
                self.set_launch_status(&text, result);
            }
        }
    }

    fn set_kill_status(&mut self, result: KillResult) {
        let (text, kind) = match result {
            KillResult::Success(pid) => {
                info!(pid, "terminated process");
                (format!("Terminated PID {pid}"), StatusKind::Ok)
            }
            KillResult::Failed(pid, err) => {
                warn!(pid, %err, "terminate failed");
                (err, StatusKind::Error)
            }
            KillResult::NotFound(pid) => {
                warn!(pid, "terminate target not found");
                (format!("Process {pid} not found"), StatusKind::Error)
            }
        };
        self.set_status(text, kind);
    }

    fn set_launch_status(&mut self, command: &str, result: LaunchResult) {
        let (text, kind) = match result {
            LaunchResult::Spawned(pid) => {
                info!(pid, command, "launched task");
                (format!("Started {command} (PID {pid})"), StatusKind::Ok)
            }
            LaunchResult::Failed(err) => {
                warn!(command, %err, "launch failed");
                (err, StatusKind::Error)
            }
        };
        self.set_status(text, kind);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text,
            kind,
            created: Instant::now(),
        });
    }
}
