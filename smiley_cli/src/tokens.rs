use std::error::Error;
use std::fs;

use smiley::{ErrorCategory, Lexer, Terminal, TokenSource};

/// Print one token per line, stopping at the end of input
pub fn print_tokens(filename: &str) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(filename)?;
    for line in dump_lines(&source) {
        println!("{}", line);
    }
    Ok(())
}

fn dump_lines(source: &str) -> Vec<String> {
    let mut lexer = Lexer::new(source);
    let mut lines = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            Terminal::Error => lines.push(format!(
                "[{}]: Unexpected characters `{}`",
                ErrorCategory::Lexer,
                token.text.as_ref().map_or("", String::as_str)
            )),
            Terminal::End => return lines,
            _ => lines.push(token.to_string()),
        }
    }
}
