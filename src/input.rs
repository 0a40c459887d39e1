//! Pointer-interaction state machine for highlight and zoom.

use tracing::debug;

use crate::data_types::{CellIndex, InteractionState};
use crate::host::RepaintRequester;
use crate::transform::Hit;
use crate::zoom::Zoom;

/// Owns the transient highlight/zoom state and advances it from pointer
/// events. Every transition that changes visible state requests exactly one
/// repaint; transitions that land on the same state request none.
#[derive(Debug, Default)]
pub struct InputHandler {
    state: InteractionState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Press on a data cell opens a zoom; press on a title cell starts a
    /// highlight; press elsewhere clears both.
    pub fn on_press(
        &mut self,
        hit: Hit,
        make_zoom: impl FnOnce(CellIndex) -> Zoom,
        repaint: &mut dyn RepaintRequester,
    ) {
        let next = match hit {
            Hit::DataCell(index) => InteractionState::Zooming(make_zoom(index)),
            Hit::TitleCell(index) => InteractionState::Highlighting(index),
            Hit::Outside => InteractionState::Idle,
        };
        self.apply(next, repaint);
    }

    /// Drag moves the active feature with the pointer; leaving its region
    /// cancels it. Idle drags are ignored.
    pub fn on_drag(
        &mut self,
        hit: Hit,
        make_zoom: impl FnOnce(CellIndex) -> Zoom,
        repaint: &mut dyn RepaintRequester,
    ) {
        let next = match (&self.state, hit) {
            (InteractionState::Zooming(zoom), Hit::DataCell(index)) => {
                if zoom.initiator == index {
                    return;
                }
                InteractionState::Zooming(make_zoom(index))
            }
            (InteractionState::Zooming(_), _) => InteractionState::Idle,
            (InteractionState::Highlighting(current), Hit::TitleCell(index)) => {
                if *current == index {
                    return;
                }
                InteractionState::Highlighting(index)
            }
            (InteractionState::Highlighting(_), _) => InteractionState::Idle,
            (InteractionState::Idle, _) => return,
        };
        self.apply(next, repaint);
    }

    /// Zoom and highlight are press-and-hold features, not toggles; release
    /// always returns to idle.
    pub fn on_release(&mut self, repaint: &mut dyn RepaintRequester) {
        if self.state.is_idle() {
            return;
        }
        self.apply(InteractionState::Idle, repaint);
    }

    /// Swaps in a rebuilt zoom after the layout changed under an active
    /// drag. Does not request a repaint; the resize itself already implies
    /// one.
    pub(crate) fn replace_zoom(&mut self, zoom: Zoom) {
        if matches!(self.state, InteractionState::Zooming(_)) {
            self.state = InteractionState::Zooming(zoom);
        }
    }

    fn apply(&mut self, next: InteractionState, repaint: &mut dyn RepaintRequester) {
        if next == self.state {
            return;
        }
        debug!(?next, "interaction state change");
        self.state = next;
        repaint.request_repaint();
    }
}
