//! Offloads rendering to one dedicated worker thread.
//!
//! Jobs queue on an unbounded channel and run strictly in submission order.
//! Each job carries its own reply channel, which the caller holds as a
//! [`RenderTicket`]. There is no cancellation: every queued job runs to
//! completion, including the ones still queued when the coordinator drops.

use crate::controllers::render::data::render_job::{RenderJob, RenderMode};
use crate::controllers::render::data::render_request::RenderRequest;
use crate::controllers::render::errors::RenderError;
use crate::controllers::render::events::render_event::RenderEvent;
use crate::controllers::render::ports::frame_render::FrameRenderPort;
use crate::controllers::render::ticket::{RenderTicket, TicketMessage};
use crossbeam::channel::{self, Receiver, Sender};
use log::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

struct QueuedJob {
    job_id: u64,
    job: RenderJob,
    reply: Sender<TicketMessage>,
}

pub struct RenderCoordinator {
    sender: Option<Sender<QueuedJob>>,
    worker: Option<JoinHandle<()>>,
    next_job_id: AtomicU64,
    last_completed_job: Arc<AtomicU64>,
}

impl RenderCoordinator {
    /// Starts the worker thread. Frames are produced by `renderer`.
    pub fn new<R: FrameRenderPort>(renderer: R) -> Result<Self, RenderError> {
        let (sender, receiver) = channel::unbounded();
        let last_completed_job = Arc::new(AtomicU64::new(0));
        let worker_last_completed = Arc::clone(&last_completed_job);

        let worker = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || run_worker(&renderer, &receiver, &worker_last_completed))
            .map_err(RenderError::WorkerSpawn)?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
            next_job_id: AtomicU64::new(0),
            last_completed_job,
        })
    }

    /// Queues `job` behind everything already submitted.
    ///
    /// Never fails here; if the worker is gone the ticket reports
    /// [`RenderError::WorkerCommunicationFailure`].
    pub fn submit(&self, job: RenderJob) -> RenderTicket {
        let job_id = self.next_job_id.fetch_add(1, Ordering::SeqCst) + 1;
        let (reply, receiver) = channel::unbounded();

        debug!(
            "Queueing job {} ({:?}, {} frames)",
            job_id,
            job.mode(),
            job.frame_count()
        );

        let queued = QueuedJob { job_id, job, reply };

        match &self.sender {
            Some(sender) => {
                if sender.send(queued).is_err() {
                    warn!("Render worker is gone, job {} will not run", job_id);
                }
            }
            None => warn!("Coordinator is shut down, job {} will not run", job_id),
        }

        RenderTicket::new(job_id, receiver)
    }

    /// Validates a wire request and queues the resulting job. Invalid
    /// requests are rejected here and never reach the worker.
    pub fn submit_request(&self, request: RenderRequest) -> Result<RenderTicket, RenderError> {
        let job = request.into_job()?;

        Ok(self.submit(job))
    }

    /// Id of the most recent job the worker finished, successfully or not.
    /// Zero before any job completes.
    #[must_use]
    pub fn last_completed_job(&self) -> u64 {
        self.last_completed_job.load(Ordering::Acquire)
    }

    /// Stops accepting jobs, lets the worker finish the queue and waits for
    /// it to exit.
    pub fn shutdown(&mut self) {
        self.sender.take();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("Render worker exited abnormally");
            }
        }
    }
}

impl Drop for RenderCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker<R: FrameRenderPort>(
    renderer: &R,
    jobs: &Receiver<QueuedJob>,
    last_completed_job: &AtomicU64,
) {
    info!("Render worker started");

    for QueuedJob { job_id, job, reply } in jobs.iter() {
        trace!("Worker picked up job {}", job_id);

        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| run_job(renderer, job_id, &job, &reply)));

        if let Err(payload) = outcome {
            let reason = panic_reason(payload.as_ref());
            warn!("Job {} panicked: {}", job_id, reason);
            let failure = RenderError::WorkerCommunicationFailure { job_id, reason };
            deliver(&reply, job_id, Err(failure));
        }

        last_completed_job.store(job_id, Ordering::Release);
    }

    info!("Render worker stopped");
}

fn run_job<R: FrameRenderPort>(
    renderer: &R,
    job_id: u64,
    job: &RenderJob,
    reply: &Sender<TicketMessage>,
) {
    let grid = job.grid();
    let palette = job.palette();

    match job.mode() {
        RenderMode::SingleFrame => {
            let message = job
                .viewports()
                .first()
                .ok_or(RenderError::EmptyPath)
                .and_then(|viewport| renderer.render_frame(*viewport, grid, palette))
                .map(RenderEvent::Frame);

            if let Ok(RenderEvent::Frame(frame)) = &message {
                debug!("Job {} rendered in {} ms", job_id, frame.elapsed_millis());
            }

            deliver(reply, job_id, message);
        }
        RenderMode::BatchVideo => {
            let total_frames = job.frame_count();
            let mut frames = Vec::with_capacity(total_frames);

            info!("Job {} rendering {} frames", job_id, total_frames);

            for viewport in job.viewports() {
                match renderer.render_frame(*viewport, grid, palette) {
                    Ok(frame) => frames.push(frame),
                    Err(err) => {
                        warn!("Job {} failed at frame {}: {}", job_id, frames.len(), err);
                        deliver(reply, job_id, Err(err));
                        return;
                    }
                }

                deliver(
                    reply,
                    job_id,
                    Ok(RenderEvent::Progress {
                        completed_frames: frames.len(),
                        total_frames,
                    }),
                );
            }

            deliver(reply, job_id, Ok(RenderEvent::Video(frames)));
        }
    }
}

fn deliver(reply: &Sender<TicketMessage>, job_id: u64, message: TicketMessage) {
    if reply.send(message).is_err() {
        trace!("Ticket for job {} was dropped, discarding message", job_id);
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
