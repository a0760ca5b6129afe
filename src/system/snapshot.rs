use super::process::RawProcess;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostMemory {
    pub total: u64,
    pub available: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

impl HostMemory {
    pub fn ram_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total.saturating_sub(self.available) as f64 * 100.0 / self.total as f64
    }

    pub fn swap_used(&self) -> u64 {
        self.swap_total.saturating_sub(self.swap_free)
    }

    pub fn swap_percent(&self) -> f64 {
        if self.swap_total == 0 {
            return 0.0;
        }
        self.swap_used() as f64 * 100.0 / self.swap_total as f64
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostSnapshot {
    pub processes: Vec<RawProcess>,
    pub memory: HostMemory,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_percentages() {
        let memory = HostMemory {
            total: 1000,
            available: 250,
            swap_total: 400,
            swap_free: 300,
        };
        assert!((memory.ram_percent() - 75.0).abs() < 1e-9);
        assert_eq!(memory.swap_used(), 100);
        assert!((memory.swap_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn zero_totals_do_not_divide() {
        let memory = HostMemory::default();
        assert_eq!(memory.ram_percent(), 0.0);
        assert_eq!(memory.swap_percent(), 0.0);
    }
}
