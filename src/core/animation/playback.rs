//! Fixed-cadence playback of precomputed frames.
//!
//! [`Playback`] is the pollable state machine; [`PlaybackEngine`] drives one
//! to completion on the calling thread, sleeping between frames.

use crate::core::data::frame::Frame;
use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(100);

/// Receives frames as playback reaches them.
pub trait FramePresenter {
    fn present(&mut self, index: usize, frame: &Frame);
}

impl<F> FramePresenter for F
where
    F: FnMut(usize, &Frame),
{
    fn present(&mut self, index: usize, frame: &Frame) {
        self(index, frame)
    }
}

#[derive(Debug)]
pub struct Playback<'a> {
    frames: &'a [Frame],
    interval: Duration,
    next_index: usize,
    last_presented_at: Option<Instant>,
}

impl<'a> Playback<'a> {
    #[must_use]
    pub fn new(frames: &'a [Frame], interval: Duration) -> Self {
        Self {
            frames,
            interval,
            next_index: 0,
            last_presented_at: None,
        }
    }

    /// Returns the next frame if it is due at `now`.
    ///
    /// The first frame is due immediately; each later frame becomes due once
    /// `interval` has passed since the previous one was handed out. After the
    /// last frame playback is finished and this always returns `None`.
    pub fn poll(&mut self, now: Instant) -> Option<(usize, &'a Frame)> {
        let frame = self.frames.get(self.next_index)?;

        if let Some(due) = self.next_due() {
            if now < due {
                return None;
            }
        }

        let index = self.next_index;
        self.next_index += 1;
        self.last_presented_at = Some(now);

        Some((index, frame))
    }

    /// When the next frame becomes due, or `None` if it is due now or
    /// playback has finished.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        if self.is_finished() {
            return None;
        }

        self.last_presented_at.map(|at| at + self.interval)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_index >= self.frames.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.next_index
    }

    /// Rewinds to the first frame, which becomes due immediately.
    pub fn restart(&mut self) {
        self.next_index = 0;
        self.last_presented_at = None;
    }
}

/// Plays frame lists at a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackEngine {
    interval: Duration,
}

impl PlaybackEngine {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Presents every frame in order, blocking until the last one has been
    /// handed to `presenter`. Does not loop.
    pub fn play<P: FramePresenter + ?Sized>(&self, frames: &[Frame], presenter: &mut P) {
        info!(
            "Playing {} frames every {} ms",
            frames.len(),
            self.interval.as_millis()
        );

        let mut playback = Playback::new(frames, self.interval);

        while !playback.is_finished() {
            if let Some(due) = playback.next_due() {
                let now = Instant::now();
                if due > now {
                    thread::sleep(due - now);
                }
            }

            if let Some((index, frame)) = playback.poll(Instant::now()) {
                debug!("Presenting frame {}", index);
                presenter.present(index, frame);
            }
        }
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYBACK_INTERVAL)
    }
}
