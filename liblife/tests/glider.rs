use liblife::{board::Board, rule::Rule, Game};
use pretty_assertions::assert_eq;

const GLIDER: [[i64; 2]; 5] = [[1, 0], [2, 1], [0, 2], [1, 2], [2, 2]];

fn translated(cells: &[[i64; 2]], dx: i64, dy: i64) -> Vec<[i64; 2]> {
    cells.iter().map(|[x, y]| [x + dx, y + dy]).collect()
}

#[test]
fn a_glider_translates_diagonally_every_four_generations() {
    let mut game = Game::new(Board::new(8, 8, GLIDER), Rule::default());

    for step in 1..=2 {
        for _ in 0..4 {
            game.tick();
        }

        let expected = Board::new(8, 8, translated(&GLIDER, step, step));

        assert_eq!(expected.render(), game.board.render());
        assert_eq!(expected, game.board);
    }
}
