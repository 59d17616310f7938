use rand::Rng;

use crate::config::GridSize;
use crate::obstacles::Obstacles;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell that holds neither snake nor obstacle.
///
/// Samples until a free cell turns up; returns `None` when the board has no
/// free cell left.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    obstacles: &Obstacles,
) -> Option<Position> {
    let occupied = snake.len() + obstacles.len();
    if occupied >= bounds.total_cells() {
        return None;
    }

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) && !obstacles.contains(candidate) {
            return Some(candidate);
        }
    }
}
