use notify_rust::{Notification, Timeout};

use crate::error::NotifyError;

const APP_NAME: &str = "pomodoro";

/// Fire-and-forget desktop notifications.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(message)
            .timeout(Timeout::Default)
            .show()
            .map_err(|e| NotifyError(e.to_string()))?;
        Ok(())
    }
}
