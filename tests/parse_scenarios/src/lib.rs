#![cfg(test)]

use std::collections::BTreeSet;
use std::thread;

use matches::assert_matches;
use smiley::{
    parse, parse_reporting, parse_str, ErrorCategory, Nonterminal, ParseError, ParseTree,
    ParserSession, Step, Symbol, Terminal, GRAMMAR_TABLE, RULES,
};
use test_utils::{program, ScriptedSource};

fn nonterminal(symbol: Nonterminal) -> Symbol {
    Symbol::Nonterminal(symbol)
}

/// The node reduced from the first statement of the program's block
fn first_statement(tree: &ParseTree) -> &ParseTree {
    let block = &tree.children()[3];
    assert_eq!(block.symbol(), nonterminal(Nonterminal::Block));
    let stmt = &block.children()[0];
    assert_eq!(stmt.symbol(), nonterminal(Nonterminal::Stmt));
    &stmt.children()[0]
}

fn kinds(tree: &ParseTree) -> Vec<Terminal> {
    tree.leaves().iter().map(|token| token.kind).collect()
}

#[test]
fn test_empty_program() {
    let input = program(&[]);
    let tree = parse(ScriptedSource::from_kinds(&input)).unwrap();

    assert_eq!(tree.symbol(), nonterminal(Nonterminal::Prog));
    assert_eq!(tree.children().len(), 5);
    let block = &tree.children()[3];
    assert_eq!(block.symbol(), nonterminal(Nonterminal::Block));
    assert_eq!(block.children().len(), 1);
    assert_eq!(block.children()[0].symbol(), Symbol::Terminal(Terminal::Done));
    assert_eq!(kinds(&tree), input);
}

#[test]
fn test_declaration() {
    let input = program(&[Terminal::DataType, Terminal::Id, Terminal::Semicolon]);
    let tree = parse(ScriptedSource::from_kinds(&input)).unwrap();

    let decl = first_statement(&tree);
    assert_eq!(decl.symbol(), nonterminal(Nonterminal::Decl));
    assert_eq!(
        kinds(decl),
        vec![Terminal::DataType, Terminal::Id, Terminal::Semicolon]
    );
    assert!(decl.children().iter().all(|child| child.token().is_some()));
}

#[test]
fn test_premature_end_reported_once() {
    let source = ScriptedSource::from_lines(&[
        (Terminal::Prog, 1),
        (Terminal::Id, 1),
        (Terminal::Colon, 2),
        (Terminal::Done, 3),
    ]);
    let mut reports = Vec::new();
    let result = parse_reporting(
        source,
        &mut |line: usize, category: ErrorCategory, message: &str| {
            reports.push((line, category, message.to_owned()))
        },
    );

    match result {
        Err(ParseError::Unexpected { token, .. }) => {
            assert_eq!(token.kind, Terminal::End);
            assert_eq!(token.line, 3);
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(
        reports,
        vec![(
            3,
            ErrorCategory::Parser,
            "Unexpected token EOF, expected one of: :), done, data_type, set, if, else, while"
                .to_owned()
        )]
    );
}

#[test]
fn test_missing_else_is_empty() {
    let input = program(&[
        Terminal::If,
        Terminal::LeftParen,
        Terminal::Id,
        Terminal::RightParen,
        Terminal::Colon,
        Terminal::Done,
    ]);
    let tree = parse(ScriptedSource::from_kinds(&input)).unwrap();

    let if_else = first_statement(&tree);
    assert_eq!(if_else.symbol(), nonterminal(Nonterminal::IfElse));
    assert_eq!(if_else.children().len(), 7);
    let else_branch = &if_else.children()[6];
    assert_eq!(else_branch.symbol(), nonterminal(Nonterminal::Else));
    assert!(else_branch.children().is_empty());
    assert_eq!(kinds(&tree), input);
}

#[test]
fn test_else_branch() {
    let input = program(&[
        Terminal::If,
        Terminal::LeftParen,
        Terminal::Literal,
        Terminal::RightParen,
        Terminal::Colon,
        Terminal::Done,
        Terminal::Else,
        Terminal::Colon,
        Terminal::Done,
    ]);
    let tree = parse(ScriptedSource::from_kinds(&input)).unwrap();

    let else_branch = &first_statement(&tree).children()[6];
    assert_eq!(
        kinds(else_branch),
        vec![Terminal::Else, Terminal::Colon, Terminal::Done]
    );
}

#[test]
fn test_shift_consumes_one_token() {
    let inputs = vec![
        program(&[Terminal::DataType, Terminal::Id, Terminal::Semicolon]),
        program(&[
            Terminal::While,
            Terminal::LeftParen,
            Terminal::Not,
            Terminal::Id,
            Terminal::RightParen,
            Terminal::Colon,
            Terminal::Done,
        ]),
        vec![Terminal::Prog, Terminal::Id, Terminal::Smiley],
    ];
    for input in inputs {
        let mut source = ScriptedSource::from_kinds(&input);
        let mut shifts = 0;
        {
            let mut session = ParserSession::new(&GRAMMAR_TABLE, &mut source);
            loop {
                match session.step() {
                    Ok(Step::Shifted { .. }) => shifts += 1,
                    Ok(Step::Reduced { .. }) => {}
                    Ok(Step::Accepted(_)) | Err(_) => break,
                }
            }
        }
        assert_eq!(source.pulled(), shifts + 1);
    }
}

#[test]
fn test_deterministic() {
    let input = program(&[
        Terminal::Set,
        Terminal::Id,
        Terminal::Assign,
        Terminal::Id,
        Terminal::ExprOp,
        Terminal::Literal,
        Terminal::Semicolon,
    ]);
    let first = parse(ScriptedSource::from_kinds(&input));
    let second = parse(ScriptedSource::from_kinds(&input));
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_sentinel_after_accept() {
    let input = program(&[]);
    let mut session = ParserSession::new(&GRAMMAR_TABLE, ScriptedSource::from_kinds(&input));
    assert!(session.run().is_ok());

    let entries = session.stack().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].state, 0);
    assert_eq!(entries[1].state, GRAMMAR_TABLE.goto(0, Nonterminal::Prog).unwrap());
    assert!(entries.iter().all(|entry| entry.tree.is_none()));
}

fn run_bounded(input: &[Terminal]) -> Result<ParseTree, ParseError> {
    let mut session = ParserSession::new(&GRAMMAR_TABLE, ScriptedSource::from_kinds(input));
    for _ in 0..100 {
        match session.step() {
            Ok(Step::Shifted { .. }) | Ok(Step::Reduced { .. }) => {}
            Ok(Step::Accepted(tree)) => return Ok(tree),
            Err(err) => return Err(err),
        }
    }
    panic!("no progress on {:?}", input);
}

#[test]
fn test_short_inputs_terminate() {
    let all = &Terminal::ALL;
    assert_matches!(run_bounded(&[]), Err(ParseError::Unexpected { .. }));
    for &a in all {
        assert_matches!(run_bounded(&[a]), Err(ParseError::Unexpected { .. }));
        for &b in all {
            assert_matches!(run_bounded(&[a, b]), Err(ParseError::Unexpected { .. }));
            for &c in all {
                assert_matches!(
                    run_bounded(&[a, b, c]),
                    Err(ParseError::Unexpected { .. })
                );
            }
        }
    }
}

#[test]
fn test_sessions_on_threads() {
    let sources = vec![
        "prog a : done :)",
        "prog b : int x; done :)",
        "prog c : set x = (1 + 2) * 3; done :)",
        "prog d : while (x < 10): set x = x + 1; done done :)",
    ];
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| thread::spawn(move || parse_str(source)))
        .collect();
    for handle in handles {
        let tree = handle.join().unwrap().unwrap();
        assert_eq!(tree.symbol(), nonterminal(Nonterminal::Prog));
    }
}

#[test]
fn test_precedence() {
    let tree = parse_str("prog main :\n  set x = a + 2 * b;\ndone :)").unwrap();
    let assign = first_statement(&tree);
    assert_eq!(assign.symbol(), nonterminal(Nonterminal::Assign));
    assert_eq!(assign.line(), Some(2));

    // L_LOG_E > H_LOG_E > BOOL_E > E
    let mut expr = &assign.children()[3];
    for _ in 0..3 {
        assert_eq!(expr.children().len(), 1);
        expr = &expr.children()[0];
    }
    assert_eq!(expr.symbol(), nonterminal(Nonterminal::Expr));
    assert_eq!(expr.children().len(), 3);
    assert_eq!(expr.children()[1].symbol(), Symbol::Terminal(Terminal::ExprOp));

    let product = &expr.children()[2];
    assert_eq!(product.symbol(), nonterminal(Nonterminal::Term));
    let texts: Vec<_> = product
        .leaves()
        .iter()
        .map(|token| token.text.clone().unwrap_or_default())
        .collect();
    assert_eq!(texts, vec!["2", "*", "b"]);
}

/// Record the rule behind every nonterminal node, checking its child count on the way
fn collect_rules(tree: &ParseTree, seen: &mut BTreeSet<usize>) {
    if let ParseTree::Nonterminal { symbol, children } = tree {
        let rule_idx = RULES
            .iter()
            .position(|rule| {
                rule.produces == *symbol
                    && rule.rhs.iter().cloned().eq(children.iter().map(ParseTree::symbol))
            })
            .unwrap_or_else(|| panic!("no rule builds node\n{}", tree));
        assert_eq!(children.len(), RULES[rule_idx].arity, "rule {}", rule_idx);
        seen.insert(rule_idx);
        for child in children {
            collect_rules(child, seen);
        }
    }
}

#[test]
fn test_every_rule_builds_arity_children() {
    let source = "prog main :
        int x;
        set x = (a || b && c == d + e * -f) % !g + 1;
        if (x): done else: done
        if (y):
            while (z): done
        done
    done :)";
    let tree = parse_str(source).unwrap();

    let mut seen = BTreeSet::new();
    collect_rules(&tree, &mut seen);
    let missing: Vec<_> = (0..RULES.len()).filter(|idx| !seen.contains(idx)).collect();
    assert!(missing.is_empty(), "rules never reduced: {:?}", missing);
}

#[test]
fn test_unary_minus() {
    let tree = parse_str("prog main : set y = -a - 1; done :)").unwrap();
    let assign = first_statement(&tree);
    assert_eq!(
        kinds(assign),
        vec![
            Terminal::Set,
            Terminal::Id,
            Terminal::Assign,
            Terminal::Minus,
            Terminal::Id,
            Terminal::ExprOp,
            Terminal::Literal,
            Terminal::Semicolon
        ]
    );
}

#[test]
fn test_lexical_error_is_unexpected() {
    let mut reports = Vec::new();
    let result = parse_reporting(
        smiley::Lexer::new("prog main :\nint @;\ndone :)"),
        &mut |line: usize, category: ErrorCategory, message: &str| {
            reports.push((line, category, message.to_owned()))
        },
    );
    assert_matches!(result, Err(ParseError::Unexpected { .. }));
    assert_eq!(
        reports,
        vec![(
            2,
            ErrorCategory::Parser,
            "Unexpected token error `@`, expected one of: id".to_owned()
        )]
    );
}
