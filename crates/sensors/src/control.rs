//! Sensor list classifier
//!
//! Drains a sensor list into three output lists in a single pass:
//!
//! ```text
//! start -> evaluate-active -> skip
//!                          -> evaluate-low  -> fault
//!                                           -> evaluate-high -> fault
//!                                                            -> ok
//! ```
//!
//! Bounds are only evaluated for active sensors when fault checking is
//! enabled. Nodes are moved, never copied, and each output list keeps the
//! relative input order after whatever it already held.

use crate::list::SensorList;
use crate::sensor::Verdict;
use serde::{Deserialize, Serialize};
use slist_core::ControlConfig;
use tracing::debug;

/// Route every sensor of `list` into `skipped`, `fault` or `ok`.
///
/// `list` is empty when this returns. Each sensor lands in exactly one
/// output list, appended after its existing contents.
pub fn control(
    list: &mut SensorList,
    config: &ControlConfig,
    skipped: &mut SensorList,
    fault: &mut SensorList,
    ok: &mut SensorList,
) {
    let input_len = list.len();
    let mut skipped_tail = skipped.tail();
    let mut fault_tail = fault.tail();
    let mut ok_tail = ok.tail();
    let (mut n_skipped, mut n_fault, mut n_ok) = (0usize, 0usize, 0usize);

    let mut position = 0usize;
    while let Some(node) = list.unlink_front() {
        let verdict = node.sensor.assess(config);
        debug!(
            position,
            value = node.sensor.value,
            active = node.sensor.active,
            %verdict,
            "Routed sensor"
        );

        match verdict {
            Verdict::Skipped => {
                skipped_tail.push(node);
                n_skipped += 1;
            }
            Verdict::Fault(_) => {
                fault_tail.push(node);
                n_fault += 1;
            }
            Verdict::Ok => {
                ok_tail.push(node);
                n_ok += 1;
            }
        }
        position += 1;
    }

    debug!(
        input_len,
        check_faults = config.check_faults,
        skipped = n_skipped,
        fault = n_fault,
        ok = n_ok,
        "Sensor list classified"
    );
}

/// The three output lists of one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Inactive sensors
    pub skipped: SensorList,
    /// Active sensors reading outside their bounds
    pub fault: SensorList,
    /// Remaining active sensors
    pub ok: SensorList,
}

/// Counts and digest of a [`Partition`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSummary {
    /// Number of skipped sensors
    pub skipped: usize,
    /// Number of faulted sensors
    pub fault: usize,
    /// Number of ok sensors
    pub ok: usize,
    /// Hex BLAKE3 digest over the classified sensors
    pub digest: String,
}

impl Partition {
    /// Total sensors across the three lists
    pub fn total(&self) -> usize {
        self.skipped.len() + self.fault.len() + self.ok.len()
    }

    /// Compute BLAKE3 hash over every list, in skipped/fault/ok order
    pub fn compute_hash(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        for (tag, list) in [
            (b"skipped".as_slice(), &self.skipped),
            (b"fault".as_slice(), &self.fault),
            (b"ok".as_slice(), &self.ok),
        ] {
            hasher.update(tag);
            hasher.update(&(list.len() as u64).to_le_bytes());
            for sensor in list {
                hasher.update(&sensor.compute_hash());
            }
        }
        *hasher.finalize().as_bytes()
    }

    /// Summarize the run
    pub fn summary(&self) -> PartitionSummary {
        PartitionSummary {
            skipped: self.skipped.len(),
            fault: self.fault.len(),
            ok: self.ok.len(),
            digest: hex::encode(self.compute_hash()),
        }
    }
}

/// Classify an owned list into a fresh [`Partition`].
pub fn classify(mut list: SensorList, config: &ControlConfig) -> Partition {
    let mut partition = Partition::default();
    control(
        &mut list,
        config,
        &mut partition.skipped,
        &mut partition.fault,
        &mut partition.ok,
    );
    partition
}
