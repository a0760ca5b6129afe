#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    ByRam,
    #[default]
    ByCpu,
    ByDisk,
    ByPid,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::ByRam => SortMode::ByCpu,
            SortMode::ByCpu => SortMode::ByDisk,
            SortMode::ByDisk => SortMode::ByPid,
            SortMode::ByPid => SortMode::ByRam,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::ByRam => "RAM",
            SortMode::ByCpu => "CPU",
            SortMode::ByDisk => "DISK",
            SortMode::ByPid => "PID",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ram" | "memory" | "mem" => SortMode::ByRam,
            "disk" | "io" => SortMode::ByDisk,
            "pid" => SortMode::ByPid,
            _ => SortMode::ByCpu,
        }
    }
}
