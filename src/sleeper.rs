use log::debug;
use std::time::Duration;

/// Waits between image requests. Swapped out in tests to avoid real delays.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the current thread.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        debug!("Waiting {:?} before next image", duration);
        std::thread::sleep(duration);
    }
}
