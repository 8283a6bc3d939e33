// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the katas.

use anyhow::Context;
use clap::{Parser, Subcommand};
use snaking_katas::puzzle::{count_paths, find_path, Grid};
use snaking_katas::{logging, most_profit_from_stock_quotes, permutations, permutations_distinct, UrlShortener};

#[derive(Debug, Parser)]
#[command(name = "katas", version, about = "Word search, permutations, stock profit and URL packing")]
struct Cli {
    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a snaking path spelling WORD through the grid rows
    Search {
        #[arg(short, long)]
        word: String,
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Count every snaking path spelling WORD
    Count {
        #[arg(short, long)]
        word: String,
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Print all permutations of CHARS
    Permute {
        chars: String,
        /// Reject repeated characters
        #[arg(long)]
        distinct: bool,
    },
    /// Most profit from daily quotes
    Profit {
        #[arg(required = true, allow_negative_numbers = true)]
        quotes: Vec<f64>,
    },
    /// Pack a URL
    Encode { url: String },
    /// Unpack a packed URL
    Decode { code: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Search { word, rows } => {
            let grid = Grid::from_rows(&rows).context("invalid grid")?;
            log::info!("searching {:?} in\n{}", word, grid);
            match find_path(&grid, &word)? {
                Some(path) => {
                    let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
                    println!("found: {}", cells.join(" "));
                }
                None => println!("not found"),
            }
        }
        Command::Count { word, rows } => {
            let grid = Grid::from_rows(&rows).context("invalid grid")?;
            println!("{}", count_paths(&grid, &word)?);
        }
        Command::Permute { chars, distinct } => {
            let perms = if distinct {
                permutations_distinct(&chars)?
            } else {
                permutations(&chars)
            };
            log::info!("{} permutations", perms.len());
            for permutation in perms {
                println!("{}", permutation);
            }
        }
        Command::Profit { quotes } => {
            println!("{}", most_profit_from_stock_quotes(&quotes));
        }
        Command::Encode { url } => {
            println!("{}", UrlShortener::new().encode(&url)?);
        }
        Command::Decode { code } => {
            println!("{}", UrlShortener::new().decode(&code)?);
        }
    }

    Ok(())
}
