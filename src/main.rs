// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! With no arguments this prompts for a place on stdin, exactly like the
//! classic interactive tool. A place can also be given on the command line.

use std::io::{self, Write};

use anyhow::Result;
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};

use double_cola::queue::constants::DEFAULT_BATCH_ROWS;
use double_cola::queue::simulate;
use double_cola::{Query, Shell, ShellConfig};

#[derive(Parser)]
#[command(
    name = "double-cola",
    version,
    about = "Find who is at a given place in the Double Cola queue"
)]
struct Cli {
    /// Place in the queue, counted from 1 (0 prints a table). Prompts if omitted.
    #[arg(allow_negative_numbers = true)]
    place: Option<i64>,

    #[arg(long, default_value_t = DEFAULT_BATCH_ROWS, help = "rows printed in table mode")]
    rows: u64,

    #[arg(long, action = ArgAction::SetTrue, help = "also walk the queue directly (small places only)")]
    simulate: bool,

    #[arg(short, long, action = ArgAction::Count, help = "more logging (-v info, -vv debug, -vvv trace)")]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let shell = Shell::new(ShellConfig {
        batch_rows: cli.rows,
        ..ShellConfig::default()
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let query = match cli.place {
        Some(place) => {
            let query = Query::from_place(place, shell.config())?;
            shell.run_query(query, &mut out)?;
            query
        }
        None => shell.run(io::stdin().lock(), &mut out)?,
    };

    if let (true, Query::Single(n)) = (cli.simulate, query) {
        match simulate(n) {
            Some(participant) => writeln!(out, "Simulated: {}", participant)?,
            None => info!("Position {} is too far out to simulate", n),
        }
    }

    Ok(())
}
