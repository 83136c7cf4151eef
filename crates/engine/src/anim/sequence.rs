use thiserror::Error;

use super::{ActionTag, Direction, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{tag}' sequence facing {direction} has no frames")]
pub struct EmptySequence {
    pub tag: ActionTag,
    pub direction: Direction,
}

/// Ordered frames for one (tag, direction) pair plus a playback cursor.
///
/// `cursor` counts the frames already handed out by [`advance`]; once it
/// reaches the frame count the sequence is finished and keeps returning its
/// last frame until [`reset`].
///
/// [`advance`]: AnimationSequence::advance
/// [`reset`]: AnimationSequence::reset
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    tag: ActionTag,
    direction: Direction,
    frames: Vec<Frame>,
    cursor: usize,
}

impl AnimationSequence {
    pub fn new(
        tag: ActionTag,
        direction: Direction,
        frames: Vec<Frame>,
    ) -> Result<Self, EmptySequence> {
        if frames.is_empty() {
            return Err(EmptySequence { tag, direction });
        }
        Ok(Self {
            tag,
            direction,
            frames,
            cursor: 0,
        })
    }

    pub fn advance(&mut self) -> &Frame {
        let index = if self.finished() {
            self.frames.len() - 1
        } else {
            self.cursor += 1;
            self.cursor - 1
        };
        &self.frames[index]
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn interruptible(&self) -> bool {
        self.tag.is_interruptible()
    }

    /// Frame last handed out by `advance`, or the first frame right after a
    /// reset.
    pub fn current(&self) -> &Frame {
        &self.frames[self.cursor.saturating_sub(1)]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn tag(&self) -> ActionTag {
        self.tag
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
