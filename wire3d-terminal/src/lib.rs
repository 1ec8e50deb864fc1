/// Terminal display host for the wire3d wireframe viewer
use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wire3d_core::{AnimationState, FrameStepper, Primitive};

pub mod config;
pub mod error;
pub mod input;
pub mod renderer;

pub use config::{Args, ViewerConfig};
pub use error::{Result, ViewerError};
pub use renderer::Canvas;

const WINDOW_TITLE: &str = "wire3d";

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    state: AnimationState,
    primitive: Primitive,
    canvas: Canvas,
    frame_time: Duration,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        let (columns, rows) = terminal::size()?;
        Ok(Self::with_size(config, columns, rows))
    }

    /// Build the app for a terminal of `columns` x `rows` cells
    pub fn with_size(config: &ViewerConfig, columns: u16, rows: u16) -> Self {
        let (width, height) = input::viewport_for(columns, rows);
        let state = AnimationState::new(config.primitive.mesh_with_size(config.size))
            .with_camera(config.camera)
            .with_velocity(config.velocity)
            .with_viewport(wire3d_core::Viewport::new(width, height));

        Self {
            state,
            primitive: config.primitive,
            canvas: Canvas::new(width as usize, height as usize),
            frame_time: config.frame_time(),
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle(WINDOW_TITLE),
            cursor::Hide
        ) {
            terminal::disable_raw_mode()?;
            return Err(e.into());
        }
        info!(
            width = self.state.viewport.width,
            height = self.state.viewport.height,
            primitive = %self.primitive,
            "viewer started"
        );

        let result = self.main_loop();

        // Cleanup
        let restored = execute!(stdout(), ResetColor, terminal::LeaveAlternateScreen, cursor::Show);
        terminal::disable_raw_mode()?;
        info!("viewer stopped");

        result?;
        restored?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<()> {
        while self.state.is_running() {
            let frame_start = Instant::now();

            // Handle input
            self.handle_input()?;
            if !self.state.is_running() {
                break;
            }

            // Update and render
            self.render(frame_start)?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
                debug!(fps = self.fps, "frame rate");
            }
        }

        Ok(())
    }

    /// Drain every pending event without blocking
    fn handle_input(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Some(command) = input::command_for(&event) {
                if let input::Command::Switch(primitive) = command {
                    self.primitive = primitive;
                }
                input::apply(command, &mut self.state);
            }
        }
        Ok(())
    }

    fn render(&mut self, now: Instant) -> Result<()> {
        let list = self.state.step(now);

        let viewport = self.state.viewport;
        self.canvas
            .resize(viewport.width as usize, viewport.height as usize);
        self.canvas.clear();
        self.canvas.render(&list);

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Draw status overlay
        let rotation = self.state.rotation;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "wire3d | {} | FPS: {:.1} | X {:5.1} Y {:5.1} Z {:5.1} | 1/C=Cube 2/P=Pyramid Q=Quit",
                self.primitive, self.fps, rotation.x, rotation.y, rotation.z
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
