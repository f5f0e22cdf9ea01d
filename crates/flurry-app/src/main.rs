//! Flurry - Windowed falling-snow demo
//!
//! Animates flyweight-shared snowflakes in a window on a fixed
//! 100 ms tick.
//!
//! Usage:
//!   flurry [--width <px>] [--height <px>] [--config <snow.toml>] [--autostart]

use anyhow::{Context, Result};
use clap::Parser;
use flurry_sim::SnowConfig;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;

use app::SnowApp;

#[derive(Parser)]
#[command(name = "flurry")]
#[command(about = "Falling snow demo with flyweight-shared flake appearances")]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Path to a TOML simulation config
    #[arg(long)]
    config: Option<String>,

    /// Start the snowfall immediately
    #[arg(long)]
    autostart: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SnowConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config: {path}"))?,
        None => SnowConfig::default(),
    };

    println!(
        "[app] {} flakes per {} ms tick, {} palette colors",
        config.spawn_per_tick,
        config.tick_interval_ms,
        config.palette.len()
    );
    println!();
    println!("Controls:");
    println!("  Space/S  - Start snow");
    println!("  X        - Stop snow");
    println!("  Escape   - Quit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = SnowApp::new(args.width, args.height, config, args.autostart);
    event_loop.run_app(&mut app)?;

    Ok(())
}
