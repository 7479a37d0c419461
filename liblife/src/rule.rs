use itertools::Itertools;

use super::board::Board;
use super::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn advance(&self, board: &Board) -> Board {
        // The scan runs one cell past the rendered viewport on each axis, so
        // cells born just outside the border stay in the set even though they
        // don't render. Live cells farther out fall out of the set here.
        let next_living_cells = (0..=board.width() as i64)
            .cartesian_product(0..=board.height() as i64)
            .map(|(x, y)| Position { x, y })
            .filter(|cell| self.tick_cell(board, *cell))
            .collect_vec();

        Board::new(board.width(), board.height(), next_living_cells)
    }

    fn tick_cell(&self, board: &Board, cell: Position) -> bool {
        let alive_neighbor_count = cell
            .neighbors()
            .into_iter()
            .filter(|neighbor| board.is_alive(*neighbor))
            .count();

        if board.is_alive(cell) {
            self.survive.contains(&alive_neighbor_count)
        } else {
            self.birth.contains(&alive_neighbor_count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}
