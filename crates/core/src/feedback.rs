//! Self-expiring judgment messages.

use crate::types::{Position, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackText {
    message: String,
    pos: Position,
    color: Rgb,
    lifetime_ms: i32,
    remaining_ms: i32,
}

impl FeedbackText {
    pub fn new(message: impl Into<String>, pos: Position, color: Rgb, lifetime_ms: u32) -> Self {
        let lifetime_ms = lifetime_ms.min(i32::MAX as u32) as i32;
        Self {
            message: message.into(),
            pos,
            color,
            lifetime_ms,
            remaining_ms: lifetime_ms,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn remaining_ms(&self) -> i32 {
        self.remaining_ms
    }

    pub fn lifetime_ms(&self) -> i32 {
        self.lifetime_ms
    }

    pub fn decay(&mut self, dt_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms.min(i32::MAX as u32) as i32);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms <= 0
    }
}
