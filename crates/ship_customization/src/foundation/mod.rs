//! Foundation module - Core utilities and types
//!
//! - Color values shared by the palette and the material sinks
//! - Fixed-interval tick timing
//! - Logging setup

pub mod color;
pub mod time;
pub mod logging;
