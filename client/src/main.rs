use std::{env, fs, thread, time::Duration};

use anyhow::{ensure, Context};
use liblife::{board::Board, rule::Rule, Game};
use serde::{Deserialize, Serialize};

mod patterns;

#[derive(Debug, Clone, Deserialize, Serialize)]
struct Config {
    width: usize,
    height: usize,
    generations: usize, // How many generations to render before exiting.
    delay_millis: u64,  // Pause between generations, 0 to run flat out.
    seed: SeedConfig,   // Where the first generation's live cells come from.
    rule: Option<RuleConfig>, // Defaults to B3/S23 when absent.
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum SeedConfig {
    Pattern { name: String },
    Random { alive_cells: usize },
    Cells { living_cells: Vec<(i64, i64)> },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct RuleConfig {
    birth: Vec<usize>,
    survive: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            generations: 10,
            delay_millis: 0,
            seed: SeedConfig::Cells {
                living_cells: vec![(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)],
            },
            rule: None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(config_path) => {
            let config_serialized = fs::read(&config_path)
                .with_context(|| format!("Couldn't read config {config_path}"))?;

            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?
        }
        None => Config::default(),
    };

    let rule = match &config.rule {
        Some(rule_config) => Rule {
            birth: rule_config.birth.clone(),
            survive: rule_config.survive.clone(),
        },
        None => Rule::default(),
    };

    let mut game = Game::new(seed_board(&config)?, rule);

    for _ in 0..config.generations {
        print!("{}", game.board);
        println!("---");

        game.tick();

        if config.delay_millis > 0 {
            thread::sleep(Duration::from_millis(config.delay_millis));
        }
    }

    Ok(())
}

fn seed_board(config: &Config) -> anyhow::Result<Board> {
    ensure!(
        config.width > 0 && config.height > 0,
        "Board dimensions must be positive"
    );

    let board = match &config.seed {
        SeedConfig::Pattern { name } => {
            let pattern = patterns::find(name)
                .with_context(|| format!("Unknown pattern {name:?}"))?;

            Board::new(config.width, config.height, pattern.cells.iter().copied())
        }

        SeedConfig::Random { alive_cells } => {
            ensure!(
                *alive_cells <= config.width * config.height,
                "Board size too small for requested alive cell count"
            );

            Board::random(config.width, config.height, *alive_cells)
        }

        SeedConfig::Cells { living_cells } => {
            Board::new(config.width, config.height, living_cells.iter().copied())
        }
    };

    Ok(board)
}
