//! Wall clock.

use msglog_ports::ClockPort;
use std::time::SystemTime;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
