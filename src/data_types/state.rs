use super::CellIndex;
use crate::zoom::Zoom;

/// Transient pointer-interaction state. A single tagged variant rules out
/// half-set index pairs; highlight and zoom are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A title cell is held; `CellIndex` carries `i == j`.
    Highlighting(CellIndex),
    /// A data cell is held; the zoom model is recreated, never mutated.
    Zooming(Zoom),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn highlight(&self) -> Option<CellIndex> {
        match self {
            Self::Highlighting(index) => Some(*index),
            _ => None,
        }
    }

    pub fn zoom(&self) -> Option<&Zoom> {
        match self {
            Self::Zooming(zoom) => Some(zoom),
            _ => None,
        }
    }
}
