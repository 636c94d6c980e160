//! Keyboard state keyed by DOM `KeyboardEvent.key` names.

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_string(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.insert(key.to_string(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Arrow key first, then the matching lowercase WASD letter.
    pub fn bindings(self) -> [&'static str; 2] {
        match self {
            Direction::Up => ["ArrowUp", "w"],
            Direction::Down => ["ArrowDown", "s"],
            Direction::Left => ["ArrowLeft", "a"],
            Direction::Right => ["ArrowRight", "d"],
        }
    }

    pub fn is_held(self, input: &InputState) -> bool {
        self.bindings().iter().any(|k| input.is_down(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    #[test]
    fn unknown_key_is_up() {
        let input = InputState::default();
        assert!(!input.is_down("ArrowUp"));
    }

    #[test]
    fn key_down_then_up() {
        let mut input = InputState::default();
        input.key_down("w");
        assert!(input.is_down("w"));
        input.key_up("w");
        assert!(!input.is_down("w"));
    }

    #[test]
    fn repeated_key_down_stays_down() {
        let mut input = InputState::default();
        input.key_down("a");
        input.key_down("a");
        assert!(input.is_down("a"));
        input.key_up("a");
        assert!(!input.is_down("a"));
    }

    #[test]
    fn either_binding_holds_direction() {
        for dir in ALL {
            for key in dir.bindings() {
                let mut input = InputState::default();
                input.key_down(key);
                assert!(dir.is_held(&input), "{:?} via {}", dir, key);
                let others = ALL.iter().filter(|d| **d != dir);
                for other in others {
                    assert!(!other.is_held(&input));
                }
            }
        }
    }

    #[test]
    fn releasing_one_binding_keeps_the_other() {
        let mut input = InputState::default();
        input.key_down("ArrowLeft");
        input.key_down("a");
        input.key_up("ArrowLeft");
        assert!(Direction::Left.is_held(&input));
    }
}
