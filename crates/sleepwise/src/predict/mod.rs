//! Seam for the external sleep disorder and sleep quality classifiers.
//!
//! Models are trained and loaded outside this crate. Anything that can turn
//! a feature record into a class label implements [`Predictor`]; a failing
//! predictor never prevents suggestions from being produced.

mod fixed;
mod predictor;

pub use fixed::FixedPredictor;
pub use predictor::{PredictionOutcome, PredictionTarget, Predictor};
