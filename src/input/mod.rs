pub mod input;

pub use input::{ask_repeat, read_session_config};
