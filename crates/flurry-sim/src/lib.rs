//! Flurry Sim - Falling-snow particle simulation
//!
//! Provides the timer-driven snowfall core:
//! - Flyweight descriptor cache sharing one appearance object per
//!   (shape, color, size) combination
//! - Tick handler: spawn at the top edge, advance, cull past the
//!   bottom, request a repaint
//! - Start/stop controller with a fixed-interval tick accumulator
//! - Pluggable randomness source for deterministic tests

pub mod config;
pub mod controller;
pub mod events;
pub mod flyweight;
pub mod particle;
pub mod rng;
pub mod sim;

pub use config::SnowConfig;
pub use controller::{RunState, SnowController};
pub use events::{EventQueue, SimEvent};
pub use flyweight::{Descriptor, DescriptorCache, Shape};
pub use particle::{Flake, FlakeList};
pub use rng::{Randomness, XorShiftRng};
pub use sim::SnowSimulation;
