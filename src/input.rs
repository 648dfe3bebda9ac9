//! Player commands and the queue that feeds them into the simulation.
//!
//! Key handlers never touch the agent. They push a [`Command`] and the
//! simulation drains the queue at the start of the next tick, so input is
//! always applied in arrival order and before integration.

use crate::library::Vector2;
use std::collections::VecDeque;

/// Default acceleration added per key press
pub const IMPULSE: f32 = 0.045;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Acceleration change of a single press with the given magnitude.
    pub fn delta(self, magnitude: f32) -> Vector2 {
        match self {
            Direction::Up => [0.0, magnitude],
            Direction::Down => [0.0, -magnitude],
            Direction::Left => [-magnitude, 0.0],
            Direction::Right => [magnitude, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Thrust(Direction),
    Reset,
}

#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> CommandQueue {
        CommandQueue::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and yields every pending command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_follow_simulation_axes() {
        assert_eq!(Direction::Up.delta(IMPULSE), [0.0, 0.045]);
        assert_eq!(Direction::Down.delta(IMPULSE), [0.0, -0.045]);
        assert_eq!(Direction::Left.delta(IMPULSE), [-0.045, 0.0]);
        assert_eq!(Direction::Right.delta(IMPULSE), [0.045, 0.0]);
    }

    #[test]
    fn drain_keeps_arrival_order() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Thrust(Direction::Left));
        queue.push(Command::Reset);
        queue.push(Command::Thrust(Direction::Up));
        assert_eq!(queue.len(), 3);

        let drained: Vec<Command> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                Command::Thrust(Direction::Left),
                Command::Reset,
                Command::Thrust(Direction::Up),
            ]
        );
        assert!(queue.is_empty());
    }
}
