use super::*;
use ndarray::Array2;

/// Places mines by drawing uniform random positions and rejecting the ones already taken.
///
/// Generation is deterministic for a given seed and config.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let size = config.size();
        let mut mines: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // GameConfig guarantees at least one free cell, so this always terminates
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
            draws += 1;
            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::trace!(
            "Placed {} mines on a {}x{} board in {} draws",
            mines_placed,
            size,
            size,
            draws
        );
        MineLayout::new_unchecked(mines, mines_placed)
    }
}
