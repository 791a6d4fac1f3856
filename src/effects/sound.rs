use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::error::SoundError;

#[cfg(target_os = "macos")]
const PLAYER_CANDIDATES: &[&str] = &["afplay"];
#[cfg(not(target_os = "macos"))]
const PLAYER_CANDIDATES: &[&str] = &["paplay", "aplay"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    ShortBreak,
    LongBreak,
}

impl SoundId {
    pub fn as_str(&self) -> &str {
        match self {
            SoundId::ShortBreak => "short-break",
            SoundId::LongBreak => "long-break",
        }
    }

    /// Asset file looked up in the sounds directory.
    pub fn file_name(&self) -> &str {
        match self {
            SoundId::ShortBreak => "Blow.wav",
            SoundId::LongBreak => "Glass.wav",
        }
    }
}

/// Starts a cue and returns without waiting for playback to finish.
pub trait SoundPlayer {
    fn play(&mut self, sound: SoundId) -> Result<(), SoundError>;
}

/// Used with `--no-sound`.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, sound: SoundId) -> Result<(), SoundError> {
        debug!(sound = sound.as_str(), "sound disabled, skipping");
        Ok(())
    }
}

/// Process-lifetime audio output.
///
/// Opened once at startup with both assets resolved, passed to the session
/// runner, and dropped on exit. Playback is delegated to the platform's
/// command-line player; any cue whose asset or player is missing rings the
/// terminal bell instead. Dropping the device waits for cues still playing.
#[derive(Debug)]
pub struct AudioDevice {
    player: Option<String>,
    short_break: Option<PathBuf>,
    long_break: Option<PathBuf>,
    playing: Vec<Child>,
}

impl AudioDevice {
    pub fn open(sounds_dir: &Path) -> Self {
        let player = PLAYER_CANDIDATES
            .iter()
            .find(|candidate| find_in_path(candidate).is_some())
            .map(|candidate| candidate.to_string());

        match &player {
            Some(p) => debug!(player = %p, "using sound player"),
            None => warn!(
                candidates = ?PLAYER_CANDIDATES,
                "no sound player found, falling back to terminal bell"
            ),
        }

        Self {
            player,
            short_break: load_asset(sounds_dir, SoundId::ShortBreak),
            long_break: load_asset(sounds_dir, SoundId::LongBreak),
            playing: Vec::new(),
        }
    }

    fn asset(&self, sound: SoundId) -> Option<&Path> {
        match sound {
            SoundId::ShortBreak => self.short_break.as_deref(),
            SoundId::LongBreak => self.long_break.as_deref(),
        }
    }

    fn reap_finished(&mut self) {
        self.playing
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl SoundPlayer for AudioDevice {
    fn play(&mut self, sound: SoundId) -> Result<(), SoundError> {
        self.reap_finished();

        let (Some(player), Some(asset)) = (self.player.as_deref(), self.asset(sound)) else {
            return ring_bell();
        };

        let child = Command::new(player)
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SoundError::Spawn {
                player: player.to_string(),
                source,
            })?;

        debug!(sound = sound.as_str(), pid = child.id(), "playing");
        self.playing.push(child);
        Ok(())
    }
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        for mut child in self.playing.drain(..) {
            let _ = child.wait();
        }
    }
}

fn load_asset(dir: &Path, sound: SoundId) -> Option<PathBuf> {
    let path = dir.join(sound.file_name());
    if path.is_file() {
        Some(path)
    } else {
        warn!(
            sound = sound.as_str(),
            path = %path.display(),
            "sound asset not found, falling back to terminal bell"
        );
        None
    }
}

fn find_in_path(command: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(command))
        .find(|candidate| candidate.is_file())
}

fn ring_bell() -> Result<(), SoundError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(b"\x07")
        .and_then(|_| stdout.flush())
        .map_err(SoundError::Bell)
}
