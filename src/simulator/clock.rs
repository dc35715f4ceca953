use chrono::{Local, NaiveDateTime};
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Local wall-clock time, used to stamp notes entries.
    fn now(&self) -> NaiveDateTime;

    /// Block the whole process for `duration`.
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
