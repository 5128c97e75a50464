use crate::core::animation::keyframes::KeyframeSequence;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::palette::gradient_palette::GradientPalette;
use crate::core::util::pixel_to_complex_coords::pixel_selection_to_viewport;
use log::debug;
use std::sync::Arc;

/// Something the user did that changes what is being explored.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetViewport(Viewport),
    /// Zoom into the rectangle spanned by two pixel corners of a canvas.
    ZoomToSelection {
        from: Point,
        to: Point,
        grid: GridSize,
    },
    StepBack,
    ResetView,
    SetGradient(Arc<GradientPalette>),
}

/// Explorer state. Never mutated in place; [`ExplorerSession::apply`]
/// returns the next session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    viewport: Viewport,
    history: Vec<Viewport>,
    keyframes: KeyframeSequence,
    palette: Arc<GradientPalette>,
    grid: GridSize,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(viewport: Viewport, grid: GridSize, palette: Arc<GradientPalette>) -> Self {
        Self {
            viewport,
            history: Vec::new(),
            keyframes: KeyframeSequence::new(),
            palette,
            grid,
        }
    }

    /// Applies `action` and returns the resulting session.
    ///
    /// Every viewport change appends the outgoing viewport to the keyframes.
    /// Moving forward also pushes it onto the history; stepping back pops the
    /// history instead. Stepping back with no history changes nothing.
    pub fn apply(&self, action: SessionAction) -> Result<Self, ViewportError> {
        match action {
            SessionAction::SetViewport(viewport) => Ok(self.navigate_to(viewport)),
            SessionAction::ZoomToSelection { from, to, grid } => {
                let viewport = pixel_selection_to_viewport(from, to, grid, &self.viewport)?;
                debug!("Zooming selection {:?} -> {:?} to {}", from, to, viewport);

                Ok(self.navigate_to(viewport))
            }
            SessionAction::StepBack => Ok(self.step_back()),
            SessionAction::ResetView => Ok(self.navigate_to(Viewport::default_view())),
            SessionAction::SetGradient(palette) => Ok(Self {
                palette,
                ..self.clone()
            }),
        }
    }

    fn navigate_to(&self, viewport: Viewport) -> Self {
        debug!("Viewport {} -> {}", self.viewport, viewport);

        let mut history = self.history.clone();
        history.push(self.viewport);

        Self {
            viewport,
            history,
            keyframes: self.keyframes.with(self.viewport),
            palette: Arc::clone(&self.palette),
            grid: self.grid,
        }
    }

    fn step_back(&self) -> Self {
        let mut history = self.history.clone();

        let Some(previous) = history.pop() else {
            debug!("No history to step back through");
            return self.clone();
        };

        debug!("Stepping back {} -> {}", self.viewport, previous);

        Self {
            viewport: previous,
            history,
            keyframes: self.keyframes.with(self.viewport),
            palette: Arc::clone(&self.palette),
            grid: self.grid,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn history(&self) -> &[Viewport] {
        &self.history
    }

    #[must_use]
    pub fn keyframes(&self) -> &KeyframeSequence {
        &self.keyframes
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<GradientPalette> {
        &self.palette
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// The path a zoom video follows: every recorded keyframe, then the
    /// viewport currently on screen.
    #[must_use]
    pub fn keyframe_path(&self) -> Vec<Viewport> {
        self.keyframes.with(self.viewport).as_slice().to_vec()
    }
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self::new(
            Viewport::default_view(),
            GridSize::DEFAULT_CANVAS,
            Arc::new(GradientPalette::grayscale()),
        )
    }
}
