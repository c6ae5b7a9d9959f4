//! This directory provides some features for research.
//! - Printing the training progress per epoch
//! - Plotting the training history

/// Prints the training progress to the console.
pub(crate) mod logger;

/// Plots the training history.
pub mod plot;

pub(crate) use logger::TrainingLogger;
