use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::palette::gradient_palette::GradientPalette;
use crate::core::session::explorer_session::{ExplorerSession, SessionAction};
use log::info;
use std::sync::Arc;

/// A rectangle dragged out on the canvas, as two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    pub from: Point,
    pub to: Point,
}

/// One navigation step of a recorded exploration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomStep {
    /// Zoom into a dragged rectangle.
    Select(Selection),
    /// Return to the previous view.
    Back,
    /// Return to the default view.
    Reset,
    /// Jump to a typed-in viewport.
    Goto(Viewport),
}

impl ZoomStep {
    fn action(self, grid: GridSize) -> SessionAction {
        match self {
            Self::Select(selection) => SessionAction::ZoomToSelection {
                from: selection.from,
                to: selection.to,
                grid,
            },
            Self::Back => SessionAction::StepBack,
            Self::Reset => SessionAction::ResetView,
            Self::Goto(viewport) => SessionAction::SetViewport(viewport),
        }
    }
}

/// Replays `steps` from `start` on a canvas of `grid` and returns the
/// session they lead to. Every step that changes the view adds a keyframe.
pub fn record_zoom_session(
    start: Viewport,
    grid: GridSize,
    steps: &[ZoomStep],
) -> Result<ExplorerSession, ViewportError> {
    let mut session = ExplorerSession::new(start, grid, Arc::new(GradientPalette::grayscale()));

    for step in steps {
        session = session.apply(step.action(grid))?;
        info!("Moved to {}", session.viewport());
    }

    Ok(session)
}
