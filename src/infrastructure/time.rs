use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock used for timestamps and the upper bound of airplane years.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
