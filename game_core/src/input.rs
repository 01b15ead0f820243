//! Discrete player commands

use crate::PaddleDirection;

/// A single key-down worth of intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(PaddleDirection),
    Quit,
}
