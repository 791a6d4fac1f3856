use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::effects::{Clock, Notifier, SoundId, SoundPlayer};
use crate::error::{NotifyError, SoundError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Wait(u64),
    Sound(SoundId),
    Notify(String, String),
}

pub fn notify(title: &str, message: &str) -> Event {
    Event::Notify(title.to_string(), message.to_string())
}

/// Records every side effect in order and never actually sleeps.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    fail: bool,
}

impl Recorder {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|&e| pred(e)).count()
    }
}

impl Clock for Recorder {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.events.borrow_mut().push(Event::Wait(duration.as_secs()));
        std::future::ready(())
    }
}

impl SoundPlayer for Recorder {
    fn play(&mut self, sound: SoundId) -> Result<(), SoundError> {
        self.events.borrow_mut().push(Event::Sound(sound));
        if self.fail {
            return Err(SoundError::Bell(std::io::Error::other("no audio device")));
        }
        Ok(())
    }
}

impl Notifier for Recorder {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        self.events
            .borrow_mut()
            .push(Event::Notify(title.to_string(), message.to_string()));
        if self.fail {
            return Err(NotifyError("no notification daemon".to_string()));
        }
        Ok(())
    }
}
