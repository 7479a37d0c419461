use std::collections::HashSet;
use std::fmt;
use std::iter;

use itertools::Itertools;

use super::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    living_cells: HashSet<Position>,
}

impl Board {
    pub fn new<I, P>(width: usize, height: usize, living_cells: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        assert!(width > 0, "Board width must be positive");
        assert!(height > 0, "Board height must be positive");

        Self {
            width,
            height,
            living_cells: living_cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty(width: usize, height: usize) -> Self {
        Self::new(width, height, iter::empty::<Position>())
    }

    pub fn random(width: usize, height: usize, alive_cells: usize) -> Self {
        let mut board = Self::empty(width, height);

        let mut available_positions = (0..width as i64)
            .cartesian_product(0..height as i64)
            .map(|(x, y)| Position { x, y })
            .collect_vec();

        for _ in 0..alive_cells {
            if available_positions.is_empty() {
                panic!("Board size too small for requested alive cell count");
            }

            let chosen_index = rand::random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);

            board.living_cells.insert(chosen_position);
        }

        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn living_cells(&self) -> &HashSet<Position> {
        &self.living_cells
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.living_cells.contains(&pos.into())
    }

    pub fn render(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        if self.is_alive([x as i64, y as i64]) {
                            'x'
                        } else {
                            '.'
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
            + "\n"
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Board;

    #[test]
    fn renders_live_and_dead_cells() {
        let board = Board::new(4, 4, [[1, 1], [1, 2], [2, 2]]);

        assert_eq!(
            board.render(),
            "....\n\
             .x..\n\
             .xx.\n\
             ....\n"
        );
    }

    #[test]
    fn empty_board_renders_all_dead() {
        let board = Board::empty(4, 4);

        assert_eq!(
            board.render(),
            "....\n\
             ....\n\
             ....\n\
             ....\n"
        );
    }

    #[test]
    fn cells_outside_the_viewport_are_not_rendered() {
        let board = Board::new(3, 3, [[-1, 0], [1, 1], [5, 5]]);

        assert!(board.is_alive([-1, 0]));
        assert!(board.is_alive([5, 5]));

        assert_eq!(
            board.render(),
            "...\n\
             .x.\n\
             ...\n"
        );
    }

    #[test]
    fn display_matches_render() {
        let board = Board::new(2, 2, [[0, 1]]);

        assert_eq!(board.to_string(), board.render());
    }

    #[test]
    fn duplicate_cells_collapse() {
        let board = Board::new(3, 3, [[1, 1], [1, 1], [1, 1]]);

        assert_eq!(board.living_cells().len(), 1);
    }

    #[test]
    fn random_board_has_the_requested_cell_count_in_bounds() {
        let board = Board::random(4, 4, 5);

        assert_eq!(board.living_cells().len(), 5);

        for cell in board.living_cells() {
            assert!((0..4).contains(&cell.x));
            assert!((0..4).contains(&cell.y));
        }
    }

    #[test]
    #[should_panic(expected = "width must be positive")]
    fn zero_width_is_rejected() {
        Board::empty(0, 4);
    }

    #[test]
    #[should_panic(expected = "height must be positive")]
    fn zero_height_is_rejected() {
        Board::empty(4, 0);
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn random_board_rejects_impossible_cell_counts() {
        Board::random(2, 2, 5);
    }
}
