//! docdrift-intent
//!
//! Operational trigger catalog and the detector that reports behaviour the
//! code exhibits (math, I/O, networking, security) but the documentation
//! never names.

pub mod catalog;
pub mod detector;

pub use catalog::TriggerCatalog;
pub use detector::{light_normalize, OperationalDetector};
