//! CLI entry point for favor

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use favor::config::{default_config_path, expand_home};
use favor::{Config, Picker, Scanner, Scheduler, VoteTable, logging, prepare_trees, rank};

#[derive(Parser, Debug)]
#[command(name = "favor")]
#[command(about = "Pick a directory from your trees, most used first, and print its path")]
#[command(version)]
struct Args {
    /// Read following configuration file [default: ~/.config/favor/favor.conf]
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(long = "debug")]
    debug: bool,
}

/// Scan, rank and pick. Returns the chosen absolute path, or `None` when
/// the user made no choice.
fn run(args: &Args) -> Result<Option<PathBuf>> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = Config::load(&config_path)?;

    let votes_path = expand_home(&config.votes_path);
    let mut votes = VoteTable::load(&votes_path)?;

    let trees = prepare_trees(&config.trees, &mut votes);
    let picker = Picker::new(config.picker.clone())?;

    // Scan phase: trees and their vote snapshots are only read from here on
    let scheduler = Scheduler::new(config.threads);
    let candidates = Scanner::new(&scheduler, &config.ignore_global).scan_all(&trees);
    let candidates = rank(candidates);

    tracing::debug!(candidates = candidates.len(), "presenting candidates");

    let Some(choice) = picker.pick(&candidates)? else {
        return Ok(None);
    };

    let count = votes.increment(&choice.tree.name, &choice.dir);
    tracing::debug!(tree = %choice.tree.name, dir = %choice.dir, votes = count, "recorded vote");

    // No path is printed unless the vote was saved
    votes
        .save(&votes_path)
        .context("selection was made but votes could not be saved")?;

    Ok(Some(choice.path()))
}

fn main() {
    let args = Args::parse();

    logging::init(args.debug);

    match run(&args) {
        Ok(Some(path)) => println!("{}", path.display()),
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(error = ?e, "fatal error");
            eprintln!("favor: {:#}", e);
            process::exit(1);
        }
    }
}
