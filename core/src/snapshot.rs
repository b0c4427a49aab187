use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable copy of everything a player is allowed to see, returned to the host after each command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub mines_remaining: i32,
    pub state: GameState,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut cells = Array2::default((size, size).to_nd_index());
        for (coords, view) in board.cells() {
            cells[coords.to_nd_index()] = view;
        }

        Self {
            size,
            mines_remaining: board.mines_remaining(),
            state: board.state(),
            triggered_mine: board.triggered_mine(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|view| view.revealed).count()
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|view| view.flagged).count()
    }
}
