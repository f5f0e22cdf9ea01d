//! Flurry Core - Foundational types for the flurry snow simulation
//!
//! This crate provides the types the other flurry crates depend on:
//! - `Color` - Integer RGB color with hex parsing
//! - `Viewport` - Visible drawing area dimensions
//! - Error types and Result alias

mod error;
mod types;

pub use error::{FlurryError, Result};
pub use types::{Color, Viewport};
