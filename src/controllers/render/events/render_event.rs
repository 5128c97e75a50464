use crate::core::data::frame::Frame;

/// Messages delivered on a job's ticket.
///
/// Single-frame jobs deliver one `Frame`. Batch jobs deliver a `Progress`
/// after each rendered frame and finish with one `Video` holding every frame
/// in path order.
#[derive(Debug)]
pub enum RenderEvent {
    Progress {
        completed_frames: usize,
        total_frames: usize,
    },
    Frame(Frame),
    Video(Vec<Frame>),
}

/// What a finished job produced.
#[derive(Debug)]
pub enum RenderOutput {
    Frame(Frame),
    Video(Vec<Frame>),
}

impl RenderOutput {
    /// The rendered frames in order, one for a single-frame job.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        match self {
            Self::Frame(frame) => vec![frame],
            Self::Video(frames) => frames,
        }
    }
}
