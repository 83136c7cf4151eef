mod frames;
mod sequence;
mod tags;

pub(crate) use frames::placeholder_strip;
pub use frames::{mirror_frames, slice_sheet, Frame, FrameError};
pub use sequence::{AnimationSequence, EmptySequence};
pub use tags::{ActionTag, Direction};
