//! CLI entry point for the pattern-likeness scoring tool

use clap::Parser;
use patternscore::io::cli::{Cli, FileProcessor};

fn main() -> patternscore::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
