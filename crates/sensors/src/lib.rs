//! Sensor list control
//!
//! This crate provides:
//! - Sensor records with inclusive acceptance bounds
//! - An owned singly-linked sensor list
//! - The classifier that drains a list into skipped, fault and ok lists
//! - Counting and bulk operations over a list

#![warn(missing_docs)]

pub mod control;
pub mod list;
pub mod ops;
pub mod sensor;

pub use control::{classify, control, Partition, PartitionSummary};
pub use list::SensorList;
pub use ops::{CountSplit, SensorOp};
pub use sensor::{BoundViolation, Bounds, Sensor, Verdict};
pub use slist_core::ControlConfig;
