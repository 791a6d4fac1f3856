use std::fmt;
use std::time::Duration;

/// Settings for one session, captured from the prompts and never mutated.
///
/// Values are kept exactly as typed. Negative minutes wait for zero seconds
/// and a negative interval count runs no intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub interval_count: i64,
    pub work_minutes: i64,
    pub short_break_minutes: i64,
    pub long_break_minutes: i64,
}

impl SessionConfig {
    pub fn work_duration(&self) -> Duration {
        minutes(self.work_minutes)
    }

    pub fn short_break_duration(&self) -> Duration {
        minutes(self.short_break_minutes)
    }

    pub fn long_break_duration(&self) -> Duration {
        minutes(self.long_break_minutes)
    }

    /// Time spent waiting over the whole session:
    /// `count * (work + short break) + long break`.
    pub fn total_duration(&self) -> Duration {
        let count = u64::try_from(self.interval_count).unwrap_or(0);
        let per_interval = self
            .work_duration()
            .as_secs()
            .saturating_add(self.short_break_duration().as_secs());
        Duration::from_secs(
            count
                .saturating_mul(per_interval)
                .saturating_add(self.long_break_duration().as_secs()),
        )
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pomodoros, {}min work / {}min short break / {}min long break",
            self.interval_count, self.work_minutes, self.short_break_minutes, self.long_break_minutes
        )
    }
}

fn minutes(value: i64) -> Duration {
    let minutes = u64::try_from(value).unwrap_or(0);
    Duration::from_secs(minutes.saturating_mul(60))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Working,
    ShortBreak,
    LongBreak,
    Done,
}

impl Phase {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Working => "WORK",
            Phase::ShortBreak => "SHORT BREAK",
            Phase::LongBreak => "LONG BREAK",
            Phase::Done => "DONE",
        }
    }

    pub(crate) fn emoji(&self) -> &str {
        match self {
            Phase::Idle => "⏸",
            Phase::Working => "💼",
            Phase::ShortBreak => "☕",
            Phase::LongBreak => "🌴",
            Phase::Done => "✅",
        }
    }
}
