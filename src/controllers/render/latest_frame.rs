use crate::core::data::frame::Frame;

/// Holds the most recently presented frame and refuses results from jobs
/// older than it, so late arrivals never overwrite newer views.
#[derive(Debug, Default)]
pub struct LatestFrameSlot {
    job_id: u64,
    frame: Option<Frame>,
}

impl LatestFrameSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `frame` if `job_id` is newer than the current one. Returns
    /// whether the frame was accepted.
    pub fn offer(&mut self, job_id: u64, frame: Frame) -> bool {
        if job_id <= self.job_id {
            return false;
        }

        self.job_id = job_id;
        self.frame = Some(frame);
        true
    }

    #[must_use]
    pub fn job_id(&self) -> u64 {
        self.job_id
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn take(&mut self) -> Option<Frame> {
        self.frame.take()
    }
}
