use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the player can trigger
///
/// Decouples SDL2 key events from the game update so the update can be driven
/// (and tested) without a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flap; also starts the run from the idle screen
    Jump,
    /// Restart from the idle screen
    Reset,
    /// Switch between measured and fixed timestep
    ToggleFixedTimestep,
    /// Show/hide collider and checkpoint overlay
    ToggleColliders,
    Quit,
}

/// InputSystem translates SDL2 events into GameActions
///
/// Only fresh key presses count: auto-repeat events from a held key are
/// dropped, so holding W flaps once.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending SDL2 events and returns the actions in arrival order.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = map_keycode(key) {
                        actions.push(action);
                    }
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        actions
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Key bindings
pub fn map_keycode(key: Keycode) -> Option<GameAction> {
    match key {
        Keycode::W | Keycode::Space | Keycode::Up => Some(GameAction::Jump),
        Keycode::R => Some(GameAction::Reset),
        Keycode::E => Some(GameAction::ToggleFixedTimestep),
        Keycode::D => Some(GameAction::ToggleColliders),
        Keycode::Escape => Some(GameAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(map_keycode(Keycode::W), Some(GameAction::Jump));
        assert_eq!(map_keycode(Keycode::Space), Some(GameAction::Jump));
        assert_eq!(map_keycode(Keycode::R), Some(GameAction::Reset));
        assert_eq!(map_keycode(Keycode::E), Some(GameAction::ToggleFixedTimestep));
        assert_eq!(map_keycode(Keycode::D), Some(GameAction::ToggleColliders));
        assert_eq!(map_keycode(Keycode::Escape), Some(GameAction::Quit));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(map_keycode(Keycode::Q), None);
        assert_eq!(map_keycode(Keycode::F5), None);
    }
}
