//! Board engine for a single-player mine-clearing puzzle.
//!
//! A [`Board`] owns the mine layout and the player-visible state of every cell. Callers drive it with
//! [`Board::reveal`] and [`Board::toggle_flag`] and read it back through queries or a [`BoardSnapshot`]. Rendering,
//! input and timers are left to the host.
#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod layout;
mod snapshot;
mod types;

/// Validated board parameters: a `size × size` grid with `mines` mines, leaving at least one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let cells = mult(size, size);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Merges outcomes of several reveals, keeping the most significant one.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(
            GameConfig::new(3, 9),
            Err(GameError::TooManyMines { mines: 9, cells: 9 })
        );
        assert!(GameConfig::new(3, 8).is_ok());
    }

    #[test]
    fn config_accepts_mine_free_board() {
        let config = GameConfig::new(1, 0).unwrap();
        assert_eq!(config.total_cells(), 1);
        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn default_config_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!((config.size(), config.mines()), (10, 10));
    }

    #[test]
    fn deserialize_validates() {
        let config: GameConfig = serde_json::from_str(r#"{"size":4,"mines":3}"#).unwrap();
        assert_eq!(config, GameConfig::new(4, 3).unwrap());

        let invalid = serde_json::from_str::<GameConfig>(r#"{"size":2,"mines":4}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn reveal_outcomes_merge_by_priority() {
        use RevealOutcome::*;
        assert_eq!(Revealed | HitMine, HitMine);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(NoChange | Revealed, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
        assert!(!NoChange.has_update());
        assert!(MarkOutcome::Changed.has_update());
    }
}
