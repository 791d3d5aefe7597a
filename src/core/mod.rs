//! Core processing building blocks: resolution selection, fit/fill resize,
//! padding/cropping, and save helpers. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
