//! CLI scoreboard example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use flipscore::{BoardOptions, BoardView, PlayerId, Scoreboard};

fn main() {
    println!("Flip Seven scoreboard (type 'help' for commands, 'q' to quit)");

    let board = Scoreboard::new(BoardOptions::default());

    loop {
        print_board(&board.view());

        let line = prompt_line("> ");
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match command {
            "add" => {
                let name = rest.join(" ");
                match board.add_player(&name) {
                    Ok(id) => println!("Added player #{}.", id.0),
                    Err(err) => println!("Add error: {err}"),
                }
            }
            "remove" => match parse_id(&rest) {
                Some(id) => {
                    if let Err(err) = board.remove_player(id) {
                        println!("Remove error: {err}");
                    }
                }
                None => println!("Usage: remove <id>"),
            },
            "start" => {
                if let Err(err) = board.start_game() {
                    println!("Start error: {err}");
                }
            }
            "score" => match parse_id(&rest) {
                Some(id) => {
                    let raw = rest.get(1).copied().unwrap_or("");
                    let bonus = rest.contains(&"f7");
                    let crash = rest.contains(&"crash");
                    match board.record_score(id, raw, bonus, crash) {
                        Ok(delta) => println!("Applied {delta:+}."),
                        Err(err) => println!("Score error: {err}"),
                    }
                }
                None => println!("Usage: score <id> <points> [f7] [crash]"),
            },
            "round" => match board.next_round() {
                Ok(round) => println!("Round {round}."),
                Err(err) => println!("Round error: {err}"),
            },
            "rematch" => {
                if confirm("Tally winners and reset all scores? (y/n): ") {
                    match board.rematch() {
                        Ok(winners) if winners.is_empty() => {
                            println!("No one reached the target. Scores reset.");
                        }
                        Ok(winners) => {
                            let ids: Vec<String> =
                                winners.iter().map(|id| format!("#{}", id.0)).collect();
                            println!("Winner(s): {}. Scores reset.", ids.join(", "));
                        }
                        Err(err) => println!("Rematch error: {err}"),
                    }
                }
            }
            "reset" => {
                if confirm("CONFIRM FULL RESET? (y/n): ") {
                    board.reset_all();
                }
            }
            "undo" => {
                if let Err(err) = board.undo() {
                    println!("{err}");
                }
            }
            "help" => print_help(),
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "" => {}
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}

fn parse_id(rest: &[&str]) -> Option<PlayerId> {
    rest.first()?.parse::<u32>().ok().map(PlayerId)
}

fn print_board(view: &BoardView) {
    if view.started {
        println!("--- Round {} ---", view.round);
    } else {
        println!("--- Setup (game not started) ---");
    }

    for card in &view.players {
        let ghost = card
            .last_delta
            .map_or_else(String::new, |delta| format!(" ({delta:+})"));
        println!(
            "  #{:<3} {:>2}. {}{}{} {:>5}{} | wins: {}",
            card.id.0,
            card.rank,
            if card.is_dealer { "[D] " } else { "" },
            card.name,
            if card.is_winner { " *" } else { "" },
            card.score,
            ghost,
            card.wins,
        );
    }

    match &view.stats {
        Some(stats) => println!(
            "  total: {}  avg: {}  leader gap: {}",
            stats.total, stats.average, stats.leader_gap
        ),
        None => println!("  waiting for players..."),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <name>                   add a player");
    println!("  remove <id>                  remove a player");
    println!("  start                        start the game");
    println!("  score <id> <pts> [f7] [crash] record a round score");
    println!("  round                        next round (rotates dealer)");
    println!("  rematch                      tally winners, reset scores");
    println!("  reset                        full reset");
    println!("  undo                         undo the last action");
    println!("  q                            quit");
}

fn confirm(message: &str) -> bool {
    matches!(prompt_line(message).as_str(), "y" | "yes")
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
