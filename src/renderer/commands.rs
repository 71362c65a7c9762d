//! Recorded draw commands
//!
//! A `Surface` that keeps what was drawn instead of rasterizing it. Used by
//! the headless host and in tests.

use serde::{Deserialize, Serialize};

use super::Surface;

/// One primitive issued to a surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear,
    Circle { x: f32, y: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Score { player: u32, computer: u32 },
}

/// Commands of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(5),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Last scoreboard update in the frame, if any
    pub fn score_display(&self) -> Option<(u32, u32)> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Score { player, computer } => Some((*player, *computer)),
            _ => None,
        })
    }
}

impl Surface for CommandBuffer {
    fn clear_frame(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_circle(&mut self, x: f32, y: f32, r: f32) {
        self.commands.push(DrawCommand::Circle { x, y, r });
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn set_score_display(&mut self, player: u32, computer: u32) {
        self.commands.push(DrawCommand::Score { player, computer });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut buffer = CommandBuffer::new();
        buffer.clear_frame();
        buffer.draw_circle(1.0, 2.0, 3.0);
        buffer.set_score_display(1, 4);
        assert_eq!(buffer.commands().len(), 3);
        assert_eq!(buffer.score_display(), Some((1, 4)));

        buffer.clear_frame();
        assert_eq!(buffer.commands(), &[DrawCommand::Clear]);
        assert_eq!(buffer.score_display(), None);
    }
}
