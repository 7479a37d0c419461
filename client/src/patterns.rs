pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

// Cells are anchored near the origin so the patterns fit small boards.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    #[test]
    fn lookup_ignores_case() {
        assert_eq!(super::find("Glider").unwrap().name, "glider");
        assert!(super::find("lightweight spaceship").is_none());
    }
}
