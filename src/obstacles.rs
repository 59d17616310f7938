use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Static impassable cells, fixed for the lifetime of a session.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Obstacles {
    cells: HashSet<Position>,
}

impl Obstacles {
    /// Builds an obstacle set from explicit cells; duplicates collapse.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Samples `count` distinct random cells, none under the snake.
    ///
    /// Asks for at most as many obstacles as there are free cells.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        count: usize,
    ) -> Self {
        let free_cells = bounds.total_cells().saturating_sub(snake.len());
        let target = count.min(free_cells);
        let mut cells = HashSet::with_capacity(target);

        while cells.len() < target {
            let candidate = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if snake.occupies(candidate) {
                continue;
            }
            cells.insert(candidate);
        }

        Self { cells }
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}
