use std::time::Duration;

use chrono::Local;
use tracing::{debug, warn};

use crate::activity_log::ActivityLog;
use crate::effects::{Clock, Notifier, SoundId, SoundPlayer};
use crate::pomodoro::{Phase, SessionConfig};

pub const START_MESSAGE: &str = "The pomodoro timer has started, let's get to work!";

pub const SHORT_BREAK_TITLE: &str = "Session complete. Good work!";
pub const BACK_TO_WORK_TITLE: &str = "Back to work!";
pub const LONG_BREAK_TITLE: &str = "Time for a long break!";
pub const LONG_BREAK_DONE_TITLE: &str = "Long break complete!";
pub const LONG_BREAK_DONE_MESSAGE: &str = "Want to do another round?";

pub fn short_break_message(completed: i64) -> String {
    format!("Time for a short break! You have completed {completed} pomodoros so far")
}

pub fn back_to_work_message(remaining: i64) -> String {
    format!("Only {remaining} pomodoros to go until your long break.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub completed_intervals: i64,
    pub waited: Duration,
}

/// Runs work/break sessions against injected side-effect ports.
///
/// One runner lives for the whole process so the sound player it owns is
/// opened once and released when the runner is dropped. Every wait, cue and
/// notification happens in program order. Sound and notification failures
/// are logged and never stop the timer.
pub struct SessionRunner<C, S, N> {
    clock: C,
    player: S,
    notifier: N,
    log: ActivityLog,
    phase: Phase,
}

impl<C: Clock, S: SoundPlayer, N: Notifier> SessionRunner<C, S, N> {
    pub fn new(clock: C, player: S, notifier: N, log: ActivityLog) -> Self {
        Self {
            clock,
            player,
            notifier,
            log,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub async fn run(&mut self, config: &SessionConfig) -> SessionSummary {
        self.switch_phase(Phase::Idle);
        println!("{}", START_MESSAGE);
        self.log.log(&format!("=== Session started: {} ===", config));

        let mut completed_intervals = 0;
        let mut waited = Duration::ZERO;

        while completed_intervals < config.interval_count {
            self.switch_phase(Phase::Working);
            waited = waited.saturating_add(self.wait(config.work_duration()).await);
            completed_intervals += 1;

            self.switch_phase(Phase::ShortBreak);
            self.play(SoundId::ShortBreak);
            self.notify(SHORT_BREAK_TITLE, &short_break_message(completed_intervals));
            waited = waited.saturating_add(self.wait(config.short_break_duration()).await);
            self.notify(
                BACK_TO_WORK_TITLE,
                &back_to_work_message(config.interval_count - completed_intervals),
            );
        }

        self.switch_phase(Phase::LongBreak);
        self.play(SoundId::LongBreak);
        self.notify(LONG_BREAK_TITLE, "");
        waited = waited.saturating_add(self.wait(config.long_break_duration()).await);
        self.play(SoundId::LongBreak);
        self.notify(LONG_BREAK_DONE_TITLE, LONG_BREAK_DONE_MESSAGE);

        self.switch_phase(Phase::Done);
        self.log.log(&format!(
            "=== Session finished: {} pomodoros completed ===",
            completed_intervals
        ));

        SessionSummary {
            completed_intervals,
            waited,
        }
    }

    fn switch_phase(&mut self, phase: Phase) {
        self.phase = phase;
        let msg = format!(
            "[{}] Switched to {} phase",
            Local::now().format("%H:%M:%S"),
            phase.as_str()
        );
        println!("\n{} {}", phase.emoji(), msg);
        self.log.log(&msg);
    }

    async fn wait(&self, duration: Duration) -> Duration {
        debug!(seconds = duration.as_secs(), phase = self.phase.as_str(), "waiting");
        self.clock.sleep(duration).await;
        duration
    }

    fn play(&mut self, sound: SoundId) {
        if let Err(e) = self.player.play(sound) {
            warn!(sound = sound.as_str(), error = %e, "failed to play sound");
        }
    }

    fn notify(&self, title: &str, message: &str) {
        self.log.log(format!("🔔 {} {}", title, message).trim_end());
        if let Err(e) = self.notifier.notify(title, message) {
            warn!(title, error = %e, "failed to send notification");
        }
    }
}
