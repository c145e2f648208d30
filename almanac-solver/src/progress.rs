//! Progress reporting for long scans

/// Snapshot of a reverse scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Candidates examined so far
    pub checked: u64,
    /// Exclusive upper bound of the scan
    pub bound: u64,
}

impl ScanProgress {
    /// Completed fraction in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.bound == 0 {
            1.0
        } else {
            self.checked as f64 / self.bound as f64
        }
    }
}

/// Invokes a callback every `every` candidates.
///
/// The scan loops never print; whoever drives them decides what a progress
/// event means by supplying the callback.
pub struct ProgressReporter {
    every: u64,
    callback: Box<dyn FnMut(ScanProgress) + Send>,
}

impl ProgressReporter {
    /// Create a reporter firing at a fixed cadence (clamped to at least 1)
    pub fn new<F>(every: u64, callback: F) -> Self
    where
        F: FnMut(ScanProgress) + Send + 'static,
    {
        Self {
            every: every.max(1),
            callback: Box::new(callback),
        }
    }

    /// A reporter that never fires
    pub fn silent() -> Self {
        Self::new(u64::MAX, |_| {})
    }

    /// The configured cadence
    pub fn every(&self) -> u64 {
        self.every
    }

    /// Record that `checked` candidates are done, firing on cadence boundaries
    pub fn tick(&mut self, checked: u64, bound: u64) {
        if checked % self.every == 0 {
            self.report(checked, bound);
        }
    }

    /// Fire unconditionally
    pub fn report(&mut self, checked: u64, bound: u64) {
        (self.callback)(ScanProgress { checked, bound });
    }
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("every", &self.every)
            .finish_non_exhaustive()
    }
}
