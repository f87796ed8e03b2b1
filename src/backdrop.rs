//! Backdrop builder and runner

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::formation::{Formation, FormationCycle, DEFAULT_PERIOD, DEFAULT_SEQUENCE};
use crate::gpu::GpuState;
use crate::input::Cursor;
use crate::motion::MotionConfig;
use crate::particle::Population;
use crate::time::Time;
use crate::visuals::{Theme, VisualConfig};

/// A morphing particle backdrop builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Backdrop {
    title: String,
    size: (u32, u32),
    population: Population,
    motion: MotionConfig,
    visuals: VisualConfig,
    sequence: Vec<Formation>,
    period: Duration,
    seed: Option<u64>,
}

impl Backdrop {
    /// Create a new backdrop with default settings.
    pub fn new() -> Self {
        Self {
            title: "Antigravity".to_string(),
            size: (1280, 720),
            population: Population::default(),
            motion: MotionConfig::default(),
            visuals: VisualConfig::default(),
            sequence: DEFAULT_SEQUENCE.to_vec(),
            period: DEFAULT_PERIOD,
            seed: None,
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the population counts and width cutoff.
    pub fn with_population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    /// Set the motion tuning.
    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Configure visuals via a closure.
    pub fn with_visuals<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        f(&mut self.visuals);
        self
    }

    /// Set the starting theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.visuals.theme = theme;
        self
    }

    /// Set the formation sequence. An empty sequence falls back to the
    /// default.
    pub fn with_sequence(mut self, sequence: Vec<Formation>) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set the time between formation switches.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Fix the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the window and run. This blocks until the window is closed.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        // Window or GPU setup failures surface here, after the loop winds
        // down.
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Backdrop,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    cycle: FormationCycle,
    cursor: Cursor,
    time: Time,
    error: Option<BackdropError>,
}

impl App {
    fn new(settings: Backdrop) -> Self {
        let cycle = FormationCycle::new(settings.sequence.clone(), settings.period);
        Self {
            settings,
            window: None,
            gpu: None,
            field: None,
            cycle,
            cursor: Cursor::new(),
            time: Time::new(),
            error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.settings.size;
            let window_attrs = Window::default_attributes()
                .with_title(self.settings.title.clone())
                .with_inner_size(LogicalSize::new(width, height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    self.error = Some(BackdropError::Window(e));
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let capacity = self.settings.population.max_count();
            let gpu = match pollster::block_on(GpuState::new(window, capacity)) {
                Ok(gpu) => gpu,
                Err(e) => {
                    self.error = Some(BackdropError::Gpu(e));
                    event_loop.exit();
                    return;
                }
            };

            // The surface reports physical pixels; the field lives in that
            // space.
            let field = ParticleField::new(
                gpu.config.width as f32,
                gpu.config.height as f32,
                self.settings.population,
                self.settings.visuals.clone(),
                self.settings.motion,
                self.settings.seed,
            );
            log::info!(
                "Backdrop started: {}x{} surface, {} dashes",
                gpu.config.width,
                gpu.config.height,
                field.len()
            );

            self.field = Some(field);
            self.gpu = Some(gpu);
            self.cycle.reset();
            self.time.reset();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.cursor.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
                self.cycle.reset();
                log::debug!(
                    "Resized to {}x{}",
                    physical_size.width,
                    physical_size.height
                );
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        match code {
                            KeyCode::Escape => {
                                log::info!("Escape pressed, shutting down");
                                event_loop.exit();
                            }
                            KeyCode::KeyT => {
                                let theme = self.settings.visuals.theme.toggled();
                                self.settings.visuals.theme = theme;
                                log::debug!("Theme switched to {:?}", theme);
                            }
                            KeyCode::Space => {
                                self.time.toggle_pause();
                            }
                            _ => {}
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.time.update();

                if !self.time.is_paused() {
                    if let Some(formation) = self.cycle.poll(Instant::now()) {
                        if let Some(field) = &mut self.field {
                            field.apply_formation(formation);
                        }
                        log::debug!("Formation switched to {:?}", formation);
                    }
                    if let Some(field) = &mut self.field {
                        field.step(self.cycle.active(), self.cursor.position());
                    }
                }

                if let (Some(gpu), Some(field)) = (&mut self.gpu, &self.field) {
                    match gpu.render(field.particles(), &self.settings.visuals) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
