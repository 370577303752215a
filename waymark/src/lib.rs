//! Waymark - free-driving detection and map camera math for navigation front ends
//!
//! This library holds the two pieces of a navigation app that do real work
//! outside the navigation SDK:
//!
//! - [`driving`]: decides from a 1 Hz position stream whether the user is
//!   driving, so the map can switch to its free-driving presentation
//! - [`camera`]: turns pan and pinch gestures into camera center and zoom
//!   updates for any map renderer
//!
//! Both are leaves: the platform layer feeds them positions and gestures and
//! applies what comes back.

pub mod camera;
pub mod config;
pub mod driving;
pub mod geo;
pub mod logging;

/// Library version, from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
