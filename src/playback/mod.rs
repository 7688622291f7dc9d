//! Interactive playback.
//!
//! A [`player::Player`] advances frames from a wall clock and publishes frame updates. The
//! [`controller::PlaybackController`] reacts to those updates with seek, play and pause commands,
//! and [`session::InteractiveSession`] wires both to a code block renderer.

/// Edge-triggered loop and hold controller.
pub mod controller;
/// Player trait and the wall-clock player.
pub mod player;
/// Player, controller and renderer for one animation instance.
pub mod session;
/// Frame-domain timing derived from a code block config.
pub mod timing;
