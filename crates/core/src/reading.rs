use std::time::Duration;

/// Minutes assumed when a lesson does not declare its duration.
pub const DEFAULT_LESSON_MINUTES: u32 = 15;

/// Percentage meter that fills while a lesson is open.
///
/// One step is one percent; a full lesson of `n` minutes fills in `n` minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadingProgress {
    percent: u8,
}

impl ReadingProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between steps for a lesson of `duration_minutes`.
    #[must_use]
    pub fn step_interval(duration_minutes: u32) -> Duration {
        let minutes = if duration_minutes == 0 {
            DEFAULT_LESSON_MINUTES
        } else {
            duration_minutes
        };
        Duration::from_millis(u64::from(minutes) * 600)
    }

    /// Advance one percent. Returns false once the meter is full.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent += 1;
        true
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_scales_with_duration() {
        assert_eq!(ReadingProgress::step_interval(20), Duration::from_secs(12));
        assert_eq!(ReadingProgress::step_interval(0), Duration::from_secs(9));
    }

    #[test]
    fn stops_at_one_hundred() {
        let mut progress = ReadingProgress::new();
        let mut steps = 0;
        while progress.step() {
            steps += 1;
        }
        assert_eq!(steps, 100);
        assert_eq!(progress.percent(), 100);
        assert!(!progress.step());
    }
}
