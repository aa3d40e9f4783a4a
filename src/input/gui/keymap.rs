use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::core::navigation::command::NavCommand;

#[must_use]
pub fn command_for_key(key: KeyCode) -> Option<NavCommand> {
    let command = match key {
        KeyCode::ArrowLeft => NavCommand::PanLeft,
        KeyCode::ArrowRight => NavCommand::PanRight,
        KeyCode::ArrowUp => NavCommand::PanUp,
        KeyCode::ArrowDown => NavCommand::PanDown,
        KeyCode::Equal | KeyCode::NumpadAdd => NavCommand::IncreaseResolution,
        KeyCode::Minus | KeyCode::NumpadSubtract => NavCommand::DecreaseResolution,
        KeyCode::KeyR => NavCommand::ResetView,
        KeyCode::Escape => NavCommand::Quit,
        _ => return None,
    };

    Some(command)
}

/// Left click zooms in, right click zooms out, both at the clicked pixel.
#[must_use]
pub fn command_for_click(button: MouseButton, x: u32, y: u32) -> Option<NavCommand> {
    match button {
        MouseButton::Left => Some(NavCommand::ZoomIn { x, y }),
        MouseButton::Right => Some(NavCommand::ZoomOut { x, y }),
        _ => None,
    }
}

#[must_use]
pub fn command_for_wheel(delta: MouseScrollDelta) -> Option<NavCommand> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(NavCommand::IncreaseIterations)
    } else if y < 0.0 {
        Some(NavCommand::DecreaseIterations)
    } else {
        None
    }
}
