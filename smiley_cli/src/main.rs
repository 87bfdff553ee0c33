use std::error::Error;
use std::process;

use clap::{App, AppSettings, Arg, SubCommand};

mod parse;
mod table;
mod tokens;

fn main() {
    if let Err(err) = cli() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn cli() -> Result<(), Box<dyn Error>> {
    let matches = App::new("smiley")
        .about("Front end driver for the smiley language")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            SubCommand::with_name("tokens")
                .arg(
                    Arg::with_name("file")
                        .help("Source file to tokenize")
                        .required(true),
                ).about("Prints the token stream of a source file"),
        ).subcommand(
            SubCommand::with_name("parse")
                .arg(
                    Arg::with_name("file")
                        .help("Source file to parse")
                        .required(true),
                ).about("Parses a source file and prints its parse tree"),
        ).subcommand(
            SubCommand::with_name("table")
                .arg(
                    Arg::with_name("csv")
                        .long("--csv")
                        .takes_value(true)
                        .help("Write the parse table to a specified CSV file"),
                ).about("Prints the LALR parse table of the language"),
        ).setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    if let Some(tokens_opts) = matches.subcommand_matches("tokens") {
        let filename = tokens_opts.value_of("file").unwrap_or_default();
        tokens::print_tokens(filename)?;
    }

    if let Some(parse_opts) = matches.subcommand_matches("parse") {
        let filename = parse_opts.value_of("file").unwrap_or_default();
        parse::print_tree(filename)?;
    }

    if let Some(table_opts) = matches.subcommand_matches("table") {
        if let Some(csv_filename) = table_opts.value_of("csv") {
            table::write_table_csv(csv_filename)?;
        } else {
            table::print_table();
        }
    }

    Ok(())
}
