use crate::core::data::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Viewports recorded in the order the user visited them. Only ever grows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeSequence {
    keyframes: Vec<Viewport>,
}

impl KeyframeSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, viewport: Viewport) {
        self.keyframes.push(viewport);
    }

    /// A copy of this sequence with `viewport` appended.
    #[must_use]
    pub fn with(&self, viewport: Viewport) -> Self {
        let mut next = self.clone();
        next.record(viewport);
        next
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Viewport] {
        &self.keyframes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Viewport> {
        self.keyframes.last()
    }
}

impl From<Vec<Viewport>> for KeyframeSequence {
    fn from(keyframes: Vec<Viewport>) -> Self {
        Self { keyframes }
    }
}
