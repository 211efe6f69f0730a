//! Test utilities for qualification scenarios

use slist_core::ControlConfig;
use slist_sensors::{control, Sensor, SensorList};
use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install a test subscriber once per process so classifier traces show
/// up with `--nocapture`
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Initialize a sensor with bounds, then set its reading and activity
pub fn make_sensor(low: i32, high: i32, value: i32, active: bool) -> Sensor {
    let mut sensor = Sensor::new(low, high);
    sensor.value = value;
    sensor.active = active;
    sensor
}

/// Output lists of one `control` call, plus the drained input
pub struct ControlRun {
    pub input: SensorList,
    pub skipped: SensorList,
    pub fault: SensorList,
    pub ok: SensorList,
}

impl ControlRun {
    /// Lengths as (skipped, fault, ok)
    pub fn lens(&self) -> (usize, usize, usize) {
        (self.skipped.len(), self.fault.len(), self.ok.len())
    }
}

/// Prepend `sensors` in order onto a fresh list, then classify it
pub fn run_control(sensors: Vec<Sensor>, check_faults: bool) -> ControlRun {
    init_test_logging();

    let mut input = SensorList::new();
    for sensor in sensors {
        input.prepend(sensor);
    }

    let mut run = ControlRun {
        input: SensorList::new(),
        skipped: SensorList::new(),
        fault: SensorList::new(),
        ok: SensorList::new(),
    };
    control(
        &mut input,
        &ControlConfig { check_faults },
        &mut run.skipped,
        &mut run.fault,
        &mut run.ok,
    );
    run.input = input;
    run
}
