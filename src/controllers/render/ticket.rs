use crate::controllers::render::errors::RenderError;
use crate::controllers::render::events::render_event::{RenderEvent, RenderOutput};
use crossbeam::channel::{Receiver, TryRecvError};

pub(crate) type TicketMessage = Result<RenderEvent, RenderError>;

/// The receiving end of one submitted job.
///
/// If the worker goes away before the job's terminal message arrives, the
/// ticket reports [`RenderError::WorkerCommunicationFailure`].
#[derive(Debug)]
pub struct RenderTicket {
    job_id: u64,
    receiver: Receiver<TicketMessage>,
}

impl RenderTicket {
    pub(crate) fn new(job_id: u64, receiver: Receiver<TicketMessage>) -> Self {
        Self { job_id, receiver }
    }

    #[must_use]
    pub fn job_id(&self) -> u64 {
        self.job_id
    }

    /// Blocks until the next message for this job arrives.
    pub fn recv_event(&self) -> Result<RenderEvent, RenderError> {
        self.receiver
            .recv()
            .map_err(|_| self.lost("result channel closed"))?
    }

    /// Returns the next message if one is waiting.
    pub fn try_recv_event(&self) -> Result<Option<RenderEvent>, RenderError> {
        match self.receiver.try_recv() {
            Ok(message) => message.map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(self.lost("result channel closed")),
        }
    }

    /// Blocks until the job finishes, reporting batch progress to
    /// `on_progress` as `(completed_frames, total_frames)`.
    pub fn wait_with_progress(
        self,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<RenderOutput, RenderError> {
        loop {
            match self.recv_event()? {
                RenderEvent::Progress {
                    completed_frames,
                    total_frames,
                } => on_progress(completed_frames, total_frames),
                RenderEvent::Frame(frame) => return Ok(RenderOutput::Frame(frame)),
                RenderEvent::Video(frames) => return Ok(RenderOutput::Video(frames)),
            }
        }
    }

    /// Blocks until the job finishes.
    pub fn wait(self) -> Result<RenderOutput, RenderError> {
        self.wait_with_progress(|_, _| {})
    }

    fn lost(&self, reason: &str) -> RenderError {
        RenderError::WorkerCommunicationFailure {
            job_id: self.job_id,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame::Frame;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::viewport::Viewport;
    use crossbeam::channel::unbounded;
    use std::time::Duration;

    fn frame() -> Frame {
        Frame {
            pixel_buffer: PixelBuffer::new(GridSize::new(2, 2).unwrap()),
            viewport: Viewport::default(),
            render_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_wait_collects_progress_before_terminal_event() {
        let (sender, receiver) = unbounded();
        let ticket = RenderTicket::new(1, receiver);

        for completed in 1..=2 {
            sender
                .send(Ok(RenderEvent::Progress {
                    completed_frames: completed,
                    total_frames: 2,
                }))
                .unwrap();
        }
        sender
            .send(Ok(RenderEvent::Video(vec![frame(), frame()])))
            .unwrap();

        let mut progress = Vec::new();
        let output = ticket
            .wait_with_progress(|done, total| progress.push((done, total)))
            .unwrap();

        assert_eq!(progress, vec![(1, 2), (2, 2)]);
        assert_eq!(output.into_frames().len(), 2);
    }

    #[test]
    fn test_dropped_sender_is_a_communication_failure() {
        let (sender, receiver) = unbounded::<TicketMessage>();
        let ticket = RenderTicket::new(9, receiver);
        drop(sender);

        assert!(matches!(
            ticket.wait(),
            Err(RenderError::WorkerCommunicationFailure { job_id: 9, .. })
        ));
    }

    #[test]
    fn test_try_recv_without_message_returns_none() {
        let (_sender, receiver) = unbounded::<TicketMessage>();
        let ticket = RenderTicket::new(1, receiver);

        assert!(matches!(ticket.try_recv_event(), Ok(None)));
    }

    #[test]
    fn test_worker_error_is_delivered_to_ticket() {
        let (sender, receiver) = unbounded();
        let ticket = RenderTicket::new(3, receiver);
        sender.send(Err(RenderError::EmptyPath)).unwrap();

        assert!(matches!(ticket.recv_event(), Err(RenderError::EmptyPath)));
    }
}
