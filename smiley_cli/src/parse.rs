use std::error::Error;
use std::fs;
use std::process;

use smiley::{parse_reporting, ErrorCategory, Lexer};

/// Parse `filename` and print the tree outline
///
/// A syntax error is reported on stderr and ends the process with status 1.
pub fn print_tree(filename: &str) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(filename)?;
    let mut sink = |line: usize, category: ErrorCategory, message: &str| {
        eprintln!("[{}] line {}: {}", category, line, message);
        process::exit(1);
    };
    let tree = parse_reporting(Lexer::new(&source), &mut sink)?;
    print!("{}", tree);
    Ok(())
}
