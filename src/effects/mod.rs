pub mod clock;
pub mod notifier;
#[cfg(test)]
pub mod recorder;
pub mod sound;

pub use clock::{Clock, TokioClock};
pub use notifier::{DesktopNotifier, Notifier};
pub use sound::{AudioDevice, SilentPlayer, SoundId, SoundPlayer};
