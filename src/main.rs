use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use serein::cli::args::{Cli, Commands};
use serein::cli::commands;
use serein::error::SereinError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SereinError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Mood(args) => commands::mood(args.command, format)?,
        Commands::Task(args) => commands::task(args.command, format)?,
        Commands::Diary(args) => commands::diary(args.command, format)?,
        Commands::Today => commands::today(format)?,
        Commands::Stats(args) => commands::stats(&args.period, format)?,
        Commands::Pomodoro {
            work,
            short_break,
            long_break,
        } => commands::pomodoro(work, short_break, long_break)?,
        Commands::Breathe { seconds } => commands::breathe(seconds)?,
        Commands::Mix => commands::mix()?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
