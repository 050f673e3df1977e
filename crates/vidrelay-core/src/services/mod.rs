//! Core services.

mod shaper;

pub use shaper::{ShapeError, ShapeOutcome, VideoShaper};
