use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Countdown between two sets.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RestTimer {
    #[default]
    Stopped,
    Running { end_time: DateTime<Utc> },
}

impl RestTimer {
    #[must_use]
    pub fn start(duration: Duration) -> Self {
        Self::start_at(Utc::now(), duration)
    }

    #[must_use]
    pub fn start_at(now: DateTime<Utc>, duration: Duration) -> Self {
        Self::Running {
            end_time: now + duration,
        }
    }

    /// Move the end time. A stopped timer stays stopped.
    pub fn extend(&mut self, duration: Duration) {
        if let Self::Running { end_time } = self {
            *end_time += duration;
        }
    }

    pub fn stop(&mut self) {
        *self = Self::Stopped;
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Utc::now())
    }

    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        match self {
            Self::Stopped => Duration::zero(),
            Self::Running { end_time } => (*end_time - now).max(Duration::zero()),
        }
    }

    /// True once a running timer has reached its end time.
    #[must_use]
    pub fn is_finished_at(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Stopped => false,
            Self::Running { end_time } => now >= *end_time,
        }
    }
}

/// Format as minutes and seconds, rounded to the nearest second.
#[must_use]
pub fn format_mm_ss(duration: Duration) -> String {
    let seconds = (duration.num_milliseconds().max(0) + 500) / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
