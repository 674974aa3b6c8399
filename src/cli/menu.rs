//! The interactive command loop.

use std::io::{self, BufRead, Write};

use doxa::context::Agent;

use crate::scenarios;

/// Runs the menu loop against `agent` until stdin closes or `quit`/`exit` is entered.
///
/// Returns the process exit code: `0` if every command succeeded, `1` if any command was
/// rejected with a parse error.
pub fn run(agent: &mut Agent) -> i32 {
    print_help();

    let stdin = io::stdin();
    let mut had_error = false;

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.splitn(2, char::is_whitespace);
        let command = words.next().unwrap_or_default();
        let rest = words.next().unwrap_or_default().trim();

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            _ => {
                if !dispatch(agent, command, rest) {
                    had_error = true;
                }
            }
        }
        io::stdout().flush().ok();
    }

    if had_error {
        1
    } else {
        0
    }
}

/// Dispatches a single command. Returns `false` if the command was rejected.
fn dispatch(agent: &mut Agent, command: &str, rest: &str) -> bool {
    match command {
        "add" => report_unit(agent.add(rest).map(|_| ())),
        "remove" => {
            agent.remove(rest);
            println!("c removed '{rest}'");
            true
        }
        "list" => {
            for text in agent.list() {
                println!("c {text}");
            }
            true
        }
        "clear" => {
            agent.clear();
            println!("c base cleared");
            true
        }
        "entails" => report_value(agent.entails(rest)),
        "consistent" => report_value(agent.consistent()),
        "contract" => {
            let (selector, formula) = split_selector(rest);
            match selector {
                Some(selector) => report_unit(agent.contract(formula, selector)),
                None => report_unit(agent.contract(formula, agent.config().default_selector)),
            }
        }
        "contract_linear" => report_unit(agent.contract_linear(rest)),
        "revise" => {
            let (selector, formula) = split_selector(rest);
            match selector {
                Some(selector) => report_unit(agent.revise(formula, selector)),
                None => report_unit(agent.revise(formula, agent.config().default_selector)),
            }
        }
        "scenarios" => {
            scenarios::run_all();
            true
        }
        "mastermind" => {
            scenarios::run_mastermind_demo();
            true
        }
        other => {
            println!("c unrecognised command '{other}'");
            false
        }
    }
}

/// Splits `rest` into an optional leading selector name and the remaining formula text, e.g.
/// `"max P ∨ Q"` becomes `(Some(Selector::Max), "P ∨ Q")`.
fn split_selector(rest: &str) -> (Option<doxa::config::Selector>, &str) {
    let mut words = rest.splitn(2, char::is_whitespace);
    let first = words.next().unwrap_or_default();
    if let Ok(selector) = first.parse::<doxa::config::Selector>() {
        (Some(selector), words.next().unwrap_or_default().trim())
    } else {
        (None, rest)
    }
}

fn report_unit(result: doxa::types::err::Result<()>) -> bool {
    match result {
        Ok(()) => {
            println!("c ok");
            true
        }
        Err(e) => {
            println!("c error: {e}");
            false
        }
    }
}

fn report_value<T: std::fmt::Display>(result: doxa::types::err::Result<T>) -> bool {
    match result {
        Ok(value) => {
            println!("c {value}");
            true
        }
        Err(e) => {
            println!("c error: {e}");
            false
        }
    }
}

fn print_help() {
    println!("c commands: add <formula> | remove <formula> | list | clear | entails <formula>");
    println!("c           consistent | contract [selector] <formula> | contract_linear <formula>");
    println!("c           revise [selector] <formula> | scenarios | mastermind | help | quit");
}
