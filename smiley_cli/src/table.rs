use std::error::Error;
use std::fs::File;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use smiley::{Nonterminal, ParseTable, Terminal, GRAMMAR_TABLE};

pub fn print_table() {
    println!("{}", generate_pretty_table(&GRAMMAR_TABLE));
    println!("{}", generate_rule_table(&GRAMMAR_TABLE));
}

pub fn write_table_csv(csv_filename: &str) -> Result<(), Box<dyn Error>> {
    let pretty_table = generate_pretty_table(&GRAMMAR_TABLE);
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    Ok(())
}

fn generate_pretty_table(parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();

    let mut title_row = row!["#"];

    for t in Terminal::ALL.iter().map(|t| format!("{}", t)) {
        title_row.add_cell(cell!(t));
    }

    for n in Nonterminal::ALL.iter().map(|n| format!("{}", n)) {
        title_row.add_cell(cell!(n));
    }

    table.add_row(title_row);

    for (i, state) in parse_table.states.iter().enumerate() {
        let mut row = row![i];

        for t in Terminal::ALL.iter() {
            row.add_cell(cell![state
                .action_map
                .get(t)
                .map_or("".to_owned(), |a| format!("{}", a))]);
        }

        for n in Nonterminal::ALL.iter() {
            row.add_cell(cell![state
                .goto_map
                .get(n)
                .map_or("".to_owned(), |idx| format!("{}", idx))]);
        }

        table.add_row(row);
    }

    table
}

fn generate_rule_table(parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();
    table.add_row(row!["#", "Production rule", "Arity"]);
    for (i, rule) in parse_table.rules.iter().enumerate() {
        table.add_row(row![i, rule, rule.arity]);
    }
    table
}
