use crate::chess::{position::Position, util::FEN_START};
use crate::eval::{evaluate, trace};
use crate::thread_data::ThreadData;

#[cfg(feature = "tune")]
use crate::eval::params::{print_params_options, set_tunable_param};

pub fn run_command(command: &str, td: &mut ThreadData) {
    let command = command.trim();

    let split_ws: Vec<&str> = command
        .split_whitespace()
        .map(|token| token.trim())
        .collect();

    if split_ws.is_empty() {
        return;
    }

    match split_ws[0] {
        // UCI commands
        "uci" => {
            println!("id name Materia");
            println!("id author Materia developers");
            #[cfg(feature = "tune")]
            print_params_options();
            println!("uciok");
        }
        "setoption" => {
            if let Err(err) = uci_setoption(&split_ws) {
                println!("info string {err}");
            }
        }
        "ucinewgame" => td.ucinewgame(),
        "isready" => println!("readyok"),
        "position" => match uci_position(&split_ws) {
            Ok(pos) => td.pos = pos,
            Err(err) => println!("info string {err}"),
        },
        "quit" => std::process::exit(0),
        // Non-UCI commands
        "display" | "d" | "print" | "show" => println!("{}", td.pos),
        "nodes" => match split_ws.get(1).map(|s| s.parse::<u64>()) {
            Some(Ok(nodes)) => td.set_nodes(nodes),
            _ => println!("info string Expected a node count after 'nodes'"),
        },
        "eval" | "trace" => println!("{}", trace(&*td).trim_end()),
        "raweval" | "evaluate" | "value" => {
            if td.pos.in_check() {
                println!("info string No static evaluation in check");
            } else {
                println!("eval {}", evaluate(&*td));
            }
        }
        _ => println!("info string Unknown command '{}'", split_ws[0]),
    }
}

fn uci_setoption(tokens: &[&str]) -> Result<(), String> {
    let name: &str = tokens
        .iter()
        .position(|&token| token == "name" || token == "Name")
        .and_then(|i| tokens.get(i + 1))
        .ok_or("Couldn't get option name")?;

    let value_str: &str = tokens
        .iter()
        .position(|&token| token == "value" || token == "Value")
        .and_then(|i| tokens.get(i + 1))
        .ok_or("Couldn't get option value")?;

    apply_option(name, value_str)
}

#[cfg(feature = "tune")]
fn apply_option(name: &str, value_str: &str) -> Result<(), String> {
    set_tunable_param(name, value_str)
}

#[cfg(not(feature = "tune"))]
fn apply_option(name: &str, _value_str: &str) -> Result<(), String> {
    Err(format!("Unknown option {name}"))
}

fn uci_position(tokens: &[&str]) -> Result<Position, String> {
    if tokens.len() <= 1 {
        return Err("Expected 'startpos' or 'fen' after 'position'".to_string());
    }

    if tokens.contains(&"moves") {
        return Err("'position ... moves' is not supported".to_string());
    }

    match tokens[1] {
        "startpos" => Position::try_from(FEN_START),
        "fen" => Position::try_from(tokens[2..].join(" ").as_str()),
        other => Err(format!("Invalid token '{other}' after 'position'")),
    }
}
