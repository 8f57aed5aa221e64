//! Library exports for reusing strokepad subsystems.
//!
//! Exposes the drawing engine (shapes, gradient palette, canvas), the input
//! state machine, and the configuration data structures so that frontends
//! and tools can share validation and rendering logic with the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
