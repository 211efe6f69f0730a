//! Counting and bulk operations over a sensor list

use crate::list::SensorList;
use crate::sensor::Sensor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of splitting a list by a predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSplit {
    /// Sensors satisfying the predicate
    pub matching: usize,
    /// Sensors failing the predicate
    pub other: usize,
}

impl CountSplit {
    /// Total sensors counted
    pub fn total(&self) -> usize {
        self.matching + self.other
    }
}

/// Operation applied to each sensor by [`SensorList::for_all_in`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensorOp {
    /// Enable the sensor
    Activate,
    /// Disable the sensor
    Deactivate,
    /// Overwrite the reading
    Set(i32),
}

impl SensorOp {
    fn apply(self, sensor: &mut Sensor) {
        match self {
            SensorOp::Activate => sensor.active = true,
            SensorOp::Deactivate => sensor.active = false,
            SensorOp::Set(value) => sensor.value = value,
        }
    }
}

impl SensorList {
    /// Count sensors for which `predicate` holds, and those for which it
    /// does not.
    ///
    /// ```
    /// use slist_sensors::{Sensor, SensorList};
    ///
    /// let mut list = SensorList::new();
    /// list.prepend(Sensor::new(0, 1));
    /// let split = list.count_in(Sensor::is_active);
    /// assert_eq!((split.matching, split.other), (0, 1));
    /// ```
    pub fn count_in<P>(&self, predicate: P) -> CountSplit
    where
        P: Fn(&Sensor) -> bool,
    {
        self.iter().fold(CountSplit::default(), |mut split, sensor| {
            if predicate(sensor) {
                split.matching += 1;
            } else {
                split.other += 1;
            }
            split
        })
    }

    /// Apply `op` to every sensor, or only to active ones when
    /// `active_only` is set. Returns how many sensors were touched.
    ///
    /// Activity is sampled before the operation runs on each sensor.
    pub fn for_all_in(&mut self, op: SensorOp, active_only: bool) -> usize {
        let mut touched = 0;
        for sensor in self.iter_mut() {
            if active_only && !sensor.active {
                continue;
            }
            op.apply(sensor);
            touched += 1;
        }
        debug!(?op, active_only, touched, "Applied sensor operation");
        touched
    }
}
