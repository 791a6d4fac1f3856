pub mod pomodoro;
pub mod session;

pub use pomodoro::{Phase, SessionConfig};
pub use session::SessionRunner;
