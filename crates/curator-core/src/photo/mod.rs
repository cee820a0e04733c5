//! Staged photo domain module.
//!
//! - `model`: `StagedPhoto` and the `StagingPage` returned by the staging endpoint

mod model;

pub use model::{StagedPhoto, StagingPage};
