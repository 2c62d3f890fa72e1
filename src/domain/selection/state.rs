// SPDX-License-Identifier: MPL-2.0
//! Per-key selection lifecycle.
//!
//! ```text
//!            select                read complete
//!   Empty ───────────▶ Selected ─────────────────▶ PreviewRendered
//!     ▲                 │   ▲                          │
//!     │  reset / fail   │   └──────── select ──────────┘
//!     └─────────────────┴──────────── reset ───────────┘
//! ```

/// Where an input's selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No cached file, no preview shown.
    #[default]
    Empty,
    /// A file was picked and its read is in flight.
    Selected,
    /// The read finished and the preview shows the file.
    PreviewRendered,
}

impl SelectionState {
    /// A file was picked. Valid from any state.
    #[must_use]
    pub fn select(self) -> Self {
        SelectionState::Selected
    }

    /// The pending read finished. Only meaningful from `Selected`;
    /// other states are returned unchanged.
    #[must_use]
    pub fn read_complete(self) -> Self {
        match self {
            SelectionState::Selected => SelectionState::PreviewRendered,
            other => other,
        }
    }

    /// The pending read failed.
    #[must_use]
    pub fn read_failed(self) -> Self {
        match self {
            SelectionState::Selected => SelectionState::Empty,
            other => other,
        }
    }

    /// The reset control was activated.
    #[must_use]
    pub fn reset(self) -> Self {
        SelectionState::Empty
    }

    /// Returns `true` while a read is in flight.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, SelectionState::Selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let state = SelectionState::default();
        assert_eq!(state, SelectionState::Empty);

        let state = state.select();
        assert!(state.is_pending());

        let state = state.read_complete();
        assert_eq!(state, SelectionState::PreviewRendered);

        let state = state.select();
        assert_eq!(state, SelectionState::Selected);

        assert_eq!(state.reset(), SelectionState::Empty);
    }

    #[test]
    fn read_complete_outside_selected_is_ignored() {
        assert_eq!(SelectionState::Empty.read_complete(), SelectionState::Empty);
        assert_eq!(
            SelectionState::PreviewRendered.read_complete(),
            SelectionState::PreviewRendered
        );
    }

    #[test]
    fn failure_returns_to_empty() {
        assert_eq!(SelectionState::Selected.read_failed(), SelectionState::Empty);
        assert_eq!(
            SelectionState::PreviewRendered.read_failed(),
            SelectionState::PreviewRendered
        );
    }

    #[test]
    fn reset_is_idempotent() {
        assert_eq!(SelectionState::Empty.reset().reset(), SelectionState::Empty);
    }
}
