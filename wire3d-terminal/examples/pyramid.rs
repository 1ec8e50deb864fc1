/// Example: spin the blue pyramid around Z only
///
/// Usage: cargo run --example pyramid -- [degrees-per-second]

use std::env;
use std::io;
use wire3d_core::{Primitive, RotationState};
use wire3d_terminal::{TerminalApp, ViewerConfig};

fn main() -> io::Result<()> {
    let speed = match env::args().nth(1) {
        Some(arg) => arg.parse::<f32>().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("Bad speed '{}': {}", arg, e))
        })?,
        None => 45.0,
    };

    let config = ViewerConfig {
        primitive: Primitive::Pyramid,
        velocity: RotationState::new(0.0, 0.0, speed),
        ..ViewerConfig::default()
    };

    println!("Starting pyramid at {} deg/s (press Q to quit)...", speed);
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(&config).map_err(io::Error::other)?;
    app.run().map_err(io::Error::other)?;

    println!("Thank you for using wire3d!");
    Ok(())
}
