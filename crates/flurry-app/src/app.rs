//! Window application: winit event handling, softbuffer presentation

use flurry_core::{Color, Viewport};
use flurry_render::{render_flakes, FrameBuffer};
use flurry_sim::{EventQueue, SimEvent, SnowConfig, SnowController, SnowSimulation, XorShiftRng};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const BACKGROUND: Color = Color::new(0x10, 0x18, 0x30);
const STATUS_EVERY_TICKS: u64 = 100;

/// Softbuffer presentation state, created once the window exists
struct RenderContext {
    window: Rc<Window>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    frame: FrameBuffer,
}

impl RenderContext {
    fn new(window: Rc<Window>) -> Self {
        let context = softbuffer::Context::new(Rc::clone(&window))
            .expect("Failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, Rc::clone(&window))
            .expect("Failed to create softbuffer surface");

        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        surface
            .resize(
                NonZeroU32::new(width).expect("Width must be > 0"),
                NonZeroU32::new(height).expect("Height must be > 0"),
            )
            .expect("Failed to resize softbuffer surface");

        let frame = FrameBuffer::new(width, height);
        Self {
            window,
            surface,
            frame,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            let _ = self.surface.resize(w, h);
        }
        self.frame.resize(width, height);
    }
}

pub struct SnowApp {
    requested_width: u32,
    requested_height: u32,
    autostart: bool,
    sim: SnowSimulation,
    controller: SnowController,
    rng: XorShiftRng,
    events: EventQueue,
    last_frame: Option<Instant>,
    tick_count: u64,
    render: Option<RenderContext>,
}

impl SnowApp {
    pub fn new(width: u32, height: u32, config: SnowConfig, autostart: bool) -> Self {
        let controller = SnowController::new(config.tick_interval());
        Self {
            requested_width: width,
            requested_height: height,
            autostart,
            sim: SnowSimulation::new(config),
            controller,
            rng: XorShiftRng::from_entropy(),
            events: EventQueue::new(),
            last_frame: None,
            tick_count: 0,
            render: None,
        }
    }

    fn start_snow(&mut self) {
        if !self.controller.is_running() {
            self.controller.start();
            println!("[app] snow started");
        }
    }

    fn stop_snow(&mut self) {
        if self.controller.is_running() {
            self.controller.stop();
            println!("[app] snow stopped");
        }
    }

    /// Current drawable area, read from the live window
    fn viewport(&self) -> Viewport {
        match &self.render {
            Some(ctx) => {
                let size = ctx.window.inner_size();
                Viewport::new(size.width, size.height)
            }
            None => Viewport::new(self.requested_width, self.requested_height),
        }
    }

    /// Advance the clock, run due ticks, and drain simulation events
    fn pump(&mut self) {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(last) => now.duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_frame = Some(now);

        let viewport = self.viewport();
        if viewport.is_empty() {
            return;
        }

        self.controller
            .update(dt, &mut self.sim, viewport, &mut self.rng, &mut self.events);

        let mut needs_redraw = false;
        for event in self.events.drain() {
            match event {
                SimEvent::RedrawRequested => needs_redraw = true,
                SimEvent::TickCompleted { alive, .. } => {
                    self.tick_count += 1;
                    if self.tick_count % STATUS_EVERY_TICKS == 0 {
                        println!(
                            "[sim] tick {}: {} flakes alive, {} descriptors cached",
                            self.tick_count,
                            alive,
                            self.sim.cache().len()
                        );
                    }
                }
            }
        }

        if needs_redraw {
            if let Some(ctx) = &self.render {
                ctx.window.request_redraw();
            }
        }
    }

    fn draw(&mut self) {
        let Some(ctx) = &mut self.render else {
            return;
        };

        let size = ctx.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        if ctx.frame.width() != size.width || ctx.frame.height() != size.height {
            ctx.resize(size.width, size.height);
        }

        ctx.frame.clear(BACKGROUND);
        render_flakes(self.sim.flakes(), &mut ctx.frame);

        let Ok(mut buffer) = ctx.surface.buffer_mut() else {
            return;
        };
        if buffer.len() == ctx.frame.pixels().len() {
            buffer.copy_from_slice(ctx.frame.pixels());
            let _ = buffer.present();
        }
    }
}

impl ApplicationHandler for SnowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Flurry - Snow Simulation")
            .with_inner_size(LogicalSize::new(self.requested_width, self.requested_height));
        let window = event_loop
            .create_window(attrs)
            .expect("Failed to create window");

        self.render = Some(RenderContext::new(Rc::new(window)));

        if self.autostart {
            self.start_snow();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key_code {
                KeyCode::Space | KeyCode::KeyS => self.start_snow(),
                KeyCode::KeyX => self.stop_snow(),
                KeyCode::Escape => event_loop.exit(),
                _ => {}
            },
            WindowEvent::Resized(new_size) => {
                if let Some(ctx) = &mut self.render {
                    ctx.resize(new_size.width, new_size.height);
                    ctx.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                self.draw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.pump();
    }
}
