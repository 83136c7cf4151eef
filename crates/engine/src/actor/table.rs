use std::array;

use super::{ActorBuildError, ActorProfile};
use crate::anim::{mirror_frames, ActionTag, AnimationSequence, Direction};
use crate::assets::FrameSource;

type DirectionPair = [AnimationSequence; 2];

/// One sequence per (tag, direction), indexed by the two enums. Tags the
/// variant does not declare stay empty.
#[derive(Debug, Clone)]
pub(crate) struct SequenceTable {
    slots: [Option<DirectionPair>; ActionTag::COUNT],
}

impl SequenceTable {
    /// Loads every declared tag facing right and mirrors it once for left.
    pub(crate) fn load(
        profile: &ActorProfile,
        source: &mut dyn FrameSource,
    ) -> Result<Self, ActorBuildError> {
        let mut slots: [Option<DirectionPair>; ActionTag::COUNT] = array::from_fn(|_| None);
        for &tag in profile.tags {
            let right_frames = source
                .load_frames(
                    profile.asset,
                    tag.as_key(),
                    profile.cell_width,
                    profile.cell_height,
                )
                .map_err(|source| ActorBuildError::TagLoad {
                    kind: profile.kind,
                    tag,
                    source,
                })?;
            let left_frames = mirror_frames(&right_frames);
            let right = AnimationSequence::new(tag, Direction::Right, right_frames)?;
            let left = AnimationSequence::new(tag, Direction::Left, left_frames)?;
            slots[tag.index()] = Some([right, left]);
        }
        Ok(Self { slots })
    }

    pub(crate) fn contains(&self, tag: ActionTag) -> bool {
        self.slots[tag.index()].is_some()
    }

    pub(crate) fn get(&self, tag: ActionTag, direction: Direction) -> Option<&AnimationSequence> {
        self.slots[tag.index()]
            .as_ref()
            .map(|pair| &pair[direction.index()])
    }

    pub(crate) fn get_mut(
        &mut self,
        tag: ActionTag,
        direction: Direction,
    ) -> Option<&mut AnimationSequence> {
        self.slots[tag.index()]
            .as_mut()
            .map(|pair| &mut pair[direction.index()])
    }
}
