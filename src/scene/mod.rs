//! JSON scene boundary.
//!
//! [`config::SceneConfig`] is the human-edited description of one animated scene. It is validated
//! and prepared into a [`crate::render::scene::SceneRenderer`] before sampling.

/// Tagged scene config with loading and validation.
pub mod config;
/// Per-kind scene configs and their defaults.
pub mod model;
