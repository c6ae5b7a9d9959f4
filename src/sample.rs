//! Struct `Sample` represents a batch sample.

// Provides feature struct.
pub(crate) mod feature_struct;
// Provides sample struct.
pub(crate) mod sample_struct;


pub use sample_struct::{Sample, SampleSummary};
pub use feature_struct::Feature;
