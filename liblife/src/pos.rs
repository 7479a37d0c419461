#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn neighbors(self) -> [Position; 8] {
        const NEIGHBOR_RELATIVE_POSITIONS: [[i64; 2]; 8] = [
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        NEIGHBOR_RELATIVE_POSITIONS.map(|[dx, dy]| Position {
            x: self.x + dx,
            y: self.y + dy,
        })
    }
}

impl From<[i64; 2]> for Position {
    fn from(value: [i64; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [i64; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}
