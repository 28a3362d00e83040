//! Per-tick elapsed time.
//!
//! The group never interprets the value; it is handed unchanged to every
//! [`UpdateBehaviour`][crate::UpdateBehaviour].  Wrapping `Duration` makes a
//! negative delta unrepresentable.

use std::fmt;
use std::time::Duration;

/// Time elapsed since the previous update tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct DeltaTime(pub Duration);

impl DeltaTime {
    pub const ZERO: DeltaTime = DeltaTime(Duration::ZERO);

    /// Build from fractional seconds.
    ///
    /// Negative, NaN and infinite inputs saturate to the nearest
    /// representable duration (`ZERO` for negative and NaN).
    pub fn from_secs_f32(secs: f32) -> Self {
        DeltaTime(Duration::try_from_secs_f32(secs).unwrap_or_else(|_| {
            if secs.is_sign_positive() && secs.is_infinite() {
                Duration::MAX
            } else {
                Duration::ZERO
            }
        }))
    }

    #[inline]
    pub fn as_secs_f32(self) -> f32 {
        self.0.as_secs_f32()
    }

    #[inline]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for DeltaTime {
    #[inline]
    fn from(d: Duration) -> Self {
        DeltaTime(d)
    }
}

impl fmt::Display for DeltaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}s", self.as_secs_f32())
    }
}
