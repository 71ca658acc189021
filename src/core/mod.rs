//! Core building blocks: directory preparation, resampling, padding, and the
//! resize-and-emit loop. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
