pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::config::RenderConfig;
pub use crate::controllers::render::coordinator::RenderCoordinator;
pub use crate::controllers::render::data::render_job::{RenderJob, RenderMode};
pub use crate::controllers::render::data::render_request::RenderRequest;
pub use crate::controllers::render::errors::RenderError;
pub use crate::controllers::render::events::render_event::{RenderEvent, RenderOutput};
pub use crate::controllers::render::ticket::RenderTicket;
pub use crate::core::actions::render_frame::{FrameRenderer, RenderStrategy};
pub use crate::core::animation::interpolate::interpolate;
pub use crate::core::animation::keyframes::KeyframeSequence;
pub use crate::core::animation::playback::{FramePresenter, Playback, PlaybackEngine};
pub use crate::core::data::frame::Frame;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::palette::gradient_palette::GradientPalette;
pub use crate::core::session::explorer_session::{ExplorerSession, SessionAction};
