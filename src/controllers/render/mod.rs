//! Background rendering of single frames and frame batches.
//!
//! [`coordinator::RenderCoordinator`] owns one worker thread; callers get a
//! [`ticket::RenderTicket`] per submission and read progress and results
//! from it.

pub mod coordinator;
pub mod data;
pub mod errors;
pub mod events;
pub mod latest_frame;
pub mod ports;
pub mod ticket;
