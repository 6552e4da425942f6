//! Tracking record model

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::TICK_UNIT_LABEL;

/// Elapsed ticks since the Unix epoch (1 tick = 1 second)
///
/// The count is opaque: it is never interpreted as a calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The epoch itself (zero ticks)
    pub const EPOCH: Timestamp = Timestamp(0);

    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Current system time truncated to whole ticks
    ///
    /// Clocks set before the epoch produce a negative count.
    pub fn now() -> Self {
        let ticks = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_secs())
                .map(|secs| -secs)
                .unwrap_or(i64::MIN),
        };
        Self(ticks)
    }

    /// Tick count as a duration, `None` for pre-epoch timestamps
    pub fn as_duration_since_epoch(self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, TICK_UNIT_LABEL)
    }
}

/// One decoded tracking record
///
/// Constructed atomically from all four fields and immutable afterwards.
/// Equality compares `value3` by bit pattern, so a record holding NaN still
/// equals its own decoded copy.
#[derive(Debug, Clone, Copy)]
pub struct TrackingRecord {
    value1: i32,
    value2: i32,
    value3: f64,
    timestamp: Timestamp,
}

impl TrackingRecord {
    pub const fn new(value1: i32, value2: i32, value3: f64, timestamp: Timestamp) -> Self {
        Self {
            value1,
            value2,
            value3,
            timestamp,
        }
    }

    pub const fn value1(&self) -> i32 {
        self.value1
    }

    pub const fn value2(&self) -> i32 {
        self.value2
    }

    pub const fn value3(&self) -> f64 {
        self.value3
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl PartialEq for TrackingRecord {
    fn eq(&self, other: &Self) -> bool {
        self.value1 == other.value1
            && self.value2 == other.value2
            && self.value3.to_bits() == other.value3.to_bits()
            && self.timestamp == other.timestamp
    }
}

impl Eq for TrackingRecord {}

impl fmt::Display for TrackingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value1: {} value2: {} value3: {} timestamp: {}",
            self.value1, self.value2, self.value3, self.timestamp
        )
    }
}
