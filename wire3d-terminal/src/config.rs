/// Command-line options and the validated viewer configuration
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use wire3d_core::{Camera, Primitive, RotationState};

use crate::error::{Result, ViewerError};

/// Spin a wireframe cube or pyramid in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "wire3d-terminal", version, about)]
pub struct Args {
    /// Primitive shown at startup (cube or pyramid)
    #[arg(long, default_value = "cube")]
    pub primitive: Primitive,

    /// Half-extent of the startup primitive
    #[arg(long, default_value_t = 1.0)]
    pub size: f32,

    /// Perspective scale factor
    #[arg(long, default_value_t = 6000.0)]
    pub focal_length: f32,

    /// Distance from the camera to the origin
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    pub viewer_distance: f32,

    /// Rotation speed around X, degrees per second
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub speed_x: f32,

    /// Rotation speed around Y, degrees per second
    #[arg(long, default_value_t = -25.0, allow_negative_numbers = true)]
    pub speed_y: f32,

    /// Rotation speed around Z, degrees per second
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub speed_z: f32,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Startup settings for the terminal viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub primitive: Primitive,
    pub size: f32,
    pub camera: Camera,
    pub velocity: RotationState,
    pub fps: u32,
}

impl ViewerConfig {
    /// Time budget for one frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("size", self.size)?;
        if self.size <= 0.0 {
            return Err(ViewerError::InvalidConfig(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        check_finite("focal length", self.camera.focal_length)?;
        check_finite("viewer distance", self.camera.viewer_distance)?;
        check_finite("x speed", self.velocity.x)?;
        check_finite("y speed", self.velocity.y)?;
        check_finite("z speed", self.velocity.z)?;
        if self.fps == 0 {
            return Err(ViewerError::InvalidConfig("fps must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            primitive: Primitive::Cube,
            size: Primitive::DEFAULT_SIZE,
            camera: Camera::new(6000.0, 500.0),
            velocity: RotationState::new(50.0, -25.0, 10.0),
            fps: 30,
        }
    }
}

impl TryFrom<&Args> for ViewerConfig {
    type Error = ViewerError;

    fn try_from(args: &Args) -> Result<Self> {
        let config = Self {
            primitive: args.primitive,
            size: args.size,
            camera: Camera::new(args.focal_length, args.viewer_distance),
            velocity: RotationState::new(args.speed_x, args.speed_y, args.speed_z),
            fps: args.fps,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Args {
    /// Log level selected by the `-v` count
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn check_finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ViewerError::InvalidConfig(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}
