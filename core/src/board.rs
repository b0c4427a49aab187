use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game session, from mine placement to win or loss.
///
/// All commands take `&mut self` and run to completion; a host sharing a board between threads must serialize
/// access itself. Commands that do not apply (out of bounds, flagged or revealed cells, finished game) are silent
/// no-ops reported as `NoChange`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    layout: MineLayout,
    cells: Array2<CellState>,
    mines_remaining: i32,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Places mines at random and returns a fresh board.
    pub fn initialize(config: GameConfig, seed: u64) -> Self {
        let layout = RandomMinefieldGenerator::new(seed).generate(config);
        Self::new(layout)
    }

    /// Validates `size` and `mines` and then behaves like [`Board::initialize`].
    pub fn try_initialize(size: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        GameConfig::new(size, mines).map(|config| Self::initialize(config, seed))
    }

    pub fn new(layout: MineLayout) -> Self {
        let size = layout.size();
        log::debug!(
            "New {}x{} board with {} mines",
            size,
            size,
            layout.mine_count()
        );
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            mines_remaining: i32::from(layout.mine_count()),
            state: Default::default(),
            triggered_mine: None,
            layout,
        }
    }

    /// Starts over on a freshly generated board with the same dimensions and mine count.
    pub fn restart(&self, seed: u64) -> Self {
        Self::initialize(self.config(), seed)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.layout.game_config()
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Mine count minus placed flags; negative when the player has over-flagged.
    pub fn mines_remaining(&self) -> i32 {
        self.mines_remaining
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        let coords = self.layout.validate_coords(coords).ok()?;
        Some(Cell::new(
            self.cells[coords.to_nd_index()],
            self.layout.contains_mine(coords),
            self.layout.neighbor_mines(coords),
        ))
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.cell(coords).map(Cell::view)
    }

    /// Player-safe view of every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells.indexed_iter().map(|(index, &state)| {
            let coords = from_nd_index(index);
            let cell = Cell::new(
                state,
                self.layout.contains_mine(coords),
                self.layout.neighbor_mines(coords),
            );
            (coords, cell.view())
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    pub fn count_neighbor_mines(&self, coords: Coord2) -> Option<u8> {
        let coords = self.layout.validate_coords(coords).ok()?;
        Some(self.layout.count_neighbor_mines(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;
        use MarkOutcome::*;

        let Some(coords) = self.playable_coords(coords) else {
            return NoChange;
        };

        match self.cells[coords.to_nd_index()] {
            Hidden => {
                self.cells[coords.to_nd_index()] = Flagged;
                self.mines_remaining -= 1;
                Changed
            }
            Flagged => {
                self.cells[coords.to_nd_index()] = Hidden;
                self.mines_remaining += 1;
                Changed
            }
            Revealed => {
                log::trace!("Ignoring flag on revealed cell {:?}", coords);
                NoChange
            }
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(coords) = self.playable_coords(coords) else {
            return RevealOutcome::NoChange;
        };

        match self.cells[coords.to_nd_index()] {
            CellState::Hidden => {}
            state => {
                log::trace!("Ignoring reveal on {:?} cell {:?}", state, coords);
                return RevealOutcome::NoChange;
            }
        }

        if self.layout.contains_mine(coords) {
            self.reveal_mine(coords);
            return RevealOutcome::HitMine;
        }

        let opened = self.cascade(coords);
        log::debug!("Reveal at {:?} opened {} cells", coords, opened);

        if self.check_win() {
            self.end_game(GameState::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Whether every safe cell has been revealed. Flags are irrelevant.
    pub fn check_win(&self) -> bool {
        self.cells
            .indexed_iter()
            .all(|(index, state)| state.is_revealed() || self.layout.contains_mine(from_nd_index(index)))
    }

    /// Opens `start` and floods through connected zero cells up to their numbered border.
    ///
    /// Uses an explicit stack; a cell's revealed state doubles as the visited marker. Flagged cells are left alone
    /// and stop the flood. Returns how many cells were opened.
    fn cascade(&mut self, start: Coord2) -> usize {
        let mut opened = 0;
        let mut to_visit = Vec::from([start]);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if *cell != CellState::Hidden {
                continue;
            }
            *cell = CellState::Revealed;
            opened += 1;

            if self.layout.neighbor_mines(visit_coords) == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| matches!(self.cells[pos.to_nd_index()], CellState::Hidden)),
                );
            }
        }

        opened
    }

    /// Exposes the whole board after `coords` turned out to be a mine, dropping any flags.
    fn reveal_mine(&mut self, coords: Coord2) {
        self.cells.fill(CellState::Revealed);
        self.triggered_mine = Some(coords);
        self.end_game(GameState::Lost);
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        match self.triggered_mine {
            Some(coords) if state == GameState::Lost => log::info!("Game lost at {:?}", coords),
            _ => log::info!("Game ended: {:?}", state),
        }
        self.state = state;
    }

    /// Bounds check plus terminal-state guard shared by every command.
    fn playable_coords(&self, coords: Coord2) -> Option<Coord2> {
        if self.state.is_finished() {
            log::trace!("Ignoring move at {:?}, game is {:?}", coords, self.state);
            return None;
        }

        match self.layout.validate_coords(coords) {
            Ok(coords) => Some(coords),
            Err(err) => {
                log::trace!("Ignoring move at {:?}: {}", coords, err);
                None
            }
        }
    }
}
