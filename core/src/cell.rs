use serde::{Deserialize, Serialize};

/// Player-visible state stored by the board for every position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full record of a single cell, including hidden information.
///
/// Built on demand from the layout and the state grid, so `revealed` and `flagged` can never both be set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    pub neighbor_mines: u8,
}

impl Cell {
    pub(crate) const fn new(state: CellState, is_mine: bool, neighbor_mines: u8) -> Self {
        Self {
            is_mine,
            revealed: state.is_revealed(),
            flagged: state.is_flagged(),
            neighbor_mines,
        }
    }

    /// Projection safe to hand to a player: mine status and count stay hidden until revealed.
    pub const fn view(self) -> CellView {
        if self.revealed {
            CellView {
                revealed: true,
                flagged: false,
                is_mine: Some(self.is_mine),
                neighbor_mines: Some(self.neighbor_mines),
            }
        } else {
            CellView {
                revealed: false,
                flagged: self.flagged,
                is_mine: None,
                neighbor_mines: None,
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub is_mine: Option<bool>,
    pub neighbor_mines: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_view_does_not_leak_mine() {
        let view = Cell::new(CellState::Hidden, true, 0).view();
        assert_eq!(view.is_mine, None);
        assert_eq!(view.neighbor_mines, None);
        assert!(!view.revealed);
    }

    #[test]
    fn flagged_view_keeps_flag() {
        let view = Cell::new(CellState::Flagged, false, 2).view();
        assert!(view.flagged);
        assert_eq!(view.neighbor_mines, None);
    }

    #[test]
    fn revealed_view_exposes_contents() {
        let view = Cell::new(CellState::Revealed, false, 3).view();
        assert_eq!(view.is_mine, Some(false));
        assert_eq!(view.neighbor_mines, Some(3));
        assert!(!view.flagged);
    }
}
