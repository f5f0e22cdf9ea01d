//! Flurry Render - Drawing dispatch for the snow simulation
//!
//! - `DrawSurface` — the one primitive the simulation needs from a
//!   rendering backend: a filled circle
//! - `render_flakes` — one draw call per live flake, read-only
//! - `FrameBuffer` — CPU pixel surface used by the viewer and by tests

mod dispatch;
mod frame;
mod surface;

pub use dispatch::render_flakes;
pub use frame::FrameBuffer;
pub use surface::DrawSurface;
