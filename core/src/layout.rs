use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Where the mines are, plus the adjacent-mine count of every safe cell.
///
/// Both grids are fixed at construction and never change during a game.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    neighbor_counts: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidSize);
        }

        let cells = mult(rows as Coord, cols as Coord);
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if mine_count >= cells {
            return Err(GameError::TooManyMines {
                mines: mine_count,
                cells,
            });
        }

        Ok(Self::new_unchecked(mine_mask, mine_count))
    }

    /// Builds a layout from a square, non-empty mask known to hold exactly `mine_count` mines.
    pub(crate) fn new_unchecked(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        let neighbor_counts = Array2::from_shape_fn(mine_mask.dim(), |index| {
            if mine_mask[index] {
                0
            } else {
                count_neighbor_mines(&mine_mask, from_nd_index(index))
            }
        });

        Self {
            mine_mask,
            neighbor_counts,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Counts mines among the in-bounds 8-connected neighbors of `coords`.
    ///
    /// The cell itself is not part of its neighborhood, so calling this on a mine yields the number of *other*
    /// adjacent mines.
    pub fn count_neighbor_mines(&self, coords: Coord2) -> u8 {
        count_neighbor_mines(&self.mine_mask, coords)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows() as Coord
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Precomputed adjacent-mine count; always 0 on mine cells.
    pub fn neighbor_mines(&self, coords: Coord2) -> u8 {
        self.neighbor_counts[coords.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

fn count_neighbor_mines(mine_mask: &Array2<bool>, coords: Coord2) -> u8 {
    mine_mask
        .iter_neighbors(coords)
        .filter(|&pos| mine_mask[pos.to_nd_index()])
        .count() as u8
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_scenario_with_center_mine() {
        let layout = MineLayout::from_mine_coords(3, &[(1, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout.safe_cell_count(), 8);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 1) { 0 } else { 1 };
                assert_eq!(layout.neighbor_mines((row, col)), expected);
            }
        }
    }

    #[test]
    fn mine_cells_keep_zero_count() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0), (0, 1)]).unwrap();

        assert_eq!(layout.neighbor_mines((0, 0)), 0);
        assert_eq!(layout.count_neighbor_mines((0, 0)), 1);
        assert_eq!(layout.neighbor_mines((1, 0)), 2);
    }

    #[test]
    fn duplicate_coords_count_once() {
        let layout = MineLayout::from_mine_coords(3, &[(2, 2), (2, 2)]).unwrap();
        assert_eq!(layout.mine_count(), 1);
    }

    #[test]
    fn rejects_out_of_range_coords() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn rejects_full_board() {
        assert_eq!(
            MineLayout::from_mine_coords(1, &[(0, 0)]),
            Err(GameError::TooManyMines { mines: 1, cells: 1 })
        );
    }

    #[test]
    fn rejects_empty_and_non_square_masks() {
        assert_eq!(
            MineLayout::from_mine_mask(Array2::default([0, 0])),
            Err(GameError::InvalidSize)
        );
        assert_eq!(
            MineLayout::from_mine_mask(Array2::default([2, 3])),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn validate_coords_bounds() {
        let layout = MineLayout::from_mine_coords(4, &[]).unwrap();
        assert_eq!(layout.validate_coords((3, 3)), Ok((3, 3)));
        assert_eq!(layout.validate_coords((4, 0)), Err(GameError::InvalidCoords));
    }
}
