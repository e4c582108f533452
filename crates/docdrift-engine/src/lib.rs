//! docdrift-engine
//!
//! Composes normalizer, scorer and detector into one `analyze` call and
//! classifies the result. See [`ConsistencyEngine`].

pub mod engine;
pub mod report;

pub use engine::{build_report, ConsistencyEngine, DefaultEngine};
pub use report::{suggestions, TermBreakdown};
