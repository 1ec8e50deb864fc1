/// Maps terminal events onto animation state changes
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};
use wire3d_core::{AnimationState, Primitive};

/// Something the user asked the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// New terminal size in character cells
    Resize { columns: u16, rows: u16 },
    Switch(Primitive),
}

/// Viewport in pixels for a terminal of the given size.
///
/// Each cell shows two pixels stacked vertically.
pub fn viewport_for(columns: u16, rows: u16) -> (u32, u32) {
    (u32::from(columns), u32::from(rows) * 2)
}

/// Translate a terminal event, ignoring anything unbound
pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        Event::Resize(columns, rows) => Some(Command::Resize {
            columns: *columns,
            rows: *rows,
        }),
        _ => None,
    }
}

fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('1') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(Command::Switch(Primitive::Cube))
        }
        KeyCode::Char('2') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(Command::Switch(Primitive::Pyramid))
        }
        _ => None,
    }
}

/// Apply a command to the animation state
pub fn apply(command: Command, state: &mut AnimationState) {
    match command {
        Command::Quit => {
            info!("quit requested");
            state.stop();
        }
        Command::Resize { columns, rows } => {
            let (width, height) = viewport_for(columns, rows);
            state.set_viewport(width, height);
        }
        Command::Switch(primitive) => {
            debug!(%primitive, "switching primitive");
            state.set_mesh(primitive.mesh());
        }
    }
}
