//! Sensor records
//!
//! A sensor carries its latest reading, an enabled flag and the inclusive
//! bounds its reading must stay within while active.

use serde::{Deserialize, Serialize};
use slist_core::{ControlConfig, SensorSpec};
use std::fmt;

/// Inclusive acceptance range for a sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest acceptable reading
    pub low: i32,
    /// Highest acceptable reading
    pub high: i32,
}

impl Bounds {
    /// Create a new range. An inverted range accepts no reading.
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Check a reading, low bound first.
    pub fn check(&self, value: i32) -> Option<BoundViolation> {
        if value < self.low {
            Some(BoundViolation::BelowLow)
        } else if value > self.high {
            Some(BoundViolation::AboveHigh)
        } else {
            None
        }
    }

    /// Whether the reading lies within the range
    pub fn contains(&self, value: i32) -> bool {
        self.check(value).is_none()
    }
}

/// Which bound a reading breached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundViolation {
    /// Reading below the low bound
    BelowLow,
    /// Reading above the high bound
    AboveHigh,
}

/// Outcome of assessing one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Sensor is inactive
    Skipped,
    /// Active sensor reading outside its bounds
    Fault(BoundViolation),
    /// Active sensor with an acceptable reading, or fault checking is off
    Ok,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Skipped => write!(f, "skipped"),
            Verdict::Fault(BoundViolation::BelowLow) => write!(f, "fault(low)"),
            Verdict::Fault(BoundViolation::AboveHigh) => write!(f, "fault(high)"),
            Verdict::Ok => write!(f, "ok"),
        }
    }
}

/// Sensor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Latest reading
    pub value: i32,
    /// Whether the sensor is enabled
    pub active: bool,
    /// Acceptance range
    pub bounds: Bounds,
}

impl Sensor {
    /// Initialize an inactive sensor reading 0 with the given bounds.
    pub fn new(low: i32, high: i32) -> Self {
        Self {
            value: 0,
            active: false,
            bounds: Bounds::new(low, high),
        }
    }

    /// Build a sensor from its configuration entry
    pub fn from_spec(spec: &SensorSpec) -> Self {
        Self {
            value: spec.value,
            active: spec.active,
            bounds: Bounds::new(spec.low, spec.high),
        }
    }

    /// Whether the sensor is enabled
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the current reading lies within the bounds
    pub fn in_bounds(&self) -> bool {
        self.bounds.contains(self.value)
    }

    /// Decide where the classifier routes this sensor.
    ///
    /// Activity is evaluated first; bounds are only evaluated for active
    /// sensors and only when fault checking is enabled.
    pub fn assess(&self, config: &ControlConfig) -> Verdict {
        if !self.active {
            return Verdict::Skipped;
        }
        if config.check_faults {
            if let Some(violation) = self.bounds.check(self.value) {
                return Verdict::Fault(violation);
            }
        }
        Verdict::Ok
    }

    /// Compute BLAKE3 hash of this sensor's data
    pub fn compute_hash(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.value.to_le_bytes());
        hasher.update(&[self.active as u8]);
        hasher.update(&self.bounds.low.to_le_bytes());
        hasher.update(&self.bounds.high.to_le_bytes());
        *hasher.finalize().as_bytes()
    }
}
