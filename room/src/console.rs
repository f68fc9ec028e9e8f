use std::io::{self, BufRead};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use protocol::{Difficulty, JsonMessage, Point};

use crate::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("bad point `{0}`, expected x,y")]
    BadPoint(String),
    #[error("bad brush size `{0}`")]
    BadSize(String),
    #[error("invalid request: {0}")]
    Json(String),
    #[error("timer events cannot be sent from the console")]
    TimerRequest,
}

/// Turns one console line into requests. Lines that are not a command are
/// taken as a guess.
pub fn parse_command(line: &str) -> Result<Vec<Request>, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let requests = match command.to_lowercase().as_str() {
        "" => vec![],
        "easy" => vec![Request::DifficultyChosen(Difficulty::Easy)],
        "hard" => vec![Request::DifficultyChosen(Difficulty::Hard)],
        "difficulty" => match rest.parse::<Difficulty>() {
            Ok(difficulty) => vec![Request::DifficultyChosen(difficulty)],
            Err(_) => return Err(CommandError::MissingArgument("difficulty", "easy or hard")),
        },
        "start" => vec![Request::StartRequested],
        "guess" => vec![Request::GuessSubmitted { guess: rest.to_string() }],
        "down" => vec![Request::StrokeBegin(parse_xy(rest)?)],
        "move" => vec![Request::StrokeDrawn(parse_xy(rest)?)],
        "up" => vec![Request::StrokeEnd],
        "stroke" => {
            let points = rest
                .split_whitespace()
                .map(parse_point)
                .collect::<Result<Vec<_>, _>>()?;
            let Some((first, others)) = points.split_first() else {
                return Err(CommandError::MissingArgument("stroke", "points like 10,10 20,20"));
            };
            let mut requests = vec![Request::StrokeBegin(*first)];
            requests.extend(others.iter().map(|p| Request::StrokeDrawn(*p)));
            requests.push(Request::StrokeEnd);
            requests
        }
        "clear" => vec![Request::Clear],
        "save" => {
            let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
            vec![Request::Export { path }]
        }
        "brush" => {
            let size = rest.parse::<u8>().map_err(|_| CommandError::BadSize(rest.to_string()))?;
            vec![Request::BrushSize(size)]
        }
        "color" | "colour" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("color", "a colour name or #RRGGBB"));
            }
            vec![Request::BrushColor(rest.to_string())]
        }
        "quit" | "exit" => vec![Request::Quit],
        _ => vec![Request::GuessSubmitted { guess: line.to_string() }],
    };
    Ok(requests)
}

pub fn parse_json(line: &str) -> Result<Vec<Request>, CommandError> {
    if line.trim().is_empty() {
        return Ok(vec![]);
    }
    let req = Request::deser(line).map_err(|err| CommandError::Json(err.to_string()))?;
    if req.is_timer() {
        return Err(CommandError::TimerRequest);
    }
    Ok(vec![req])
}

fn parse_xy(rest: &str) -> Result<Point, CommandError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
            _ => Err(CommandError::BadPoint(rest.to_string())),
        },
        _ => parse_point(rest),
    }
}

fn parse_point(text: &str) -> Result<Point, CommandError> {
    let bad = || CommandError::BadPoint(text.to_string());
    let (x, y) = text.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

/// Feeds stdin into the room until EOF, which counts as quitting. Runs on
/// its own thread so a pending read never holds the runtime open.
pub fn forward_stdin(room_tx: RoomTx, json: bool) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "stdin closed");
                break;
            }
        };
        let parsed = if json { parse_json(&line) } else { parse_command(&line) };
        match parsed {
            Ok(requests) => {
                for req in requests {
                    debug!(request = req.name(), "console request");
                    if room_tx.blocking_send(req).is_err() {
                        return;
                    }
                }
            }
            Err(err) => warn!(error = %err, "unreadable input"),
        }
    }
    room_tx.blocking_send(Request::Quit).unwrap_or_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_commands() {
        assert_eq!(parse_command("Easy"), Ok(vec![Request::DifficultyChosen(Difficulty::Easy)]));
        assert_eq!(parse_command("difficulty HARD"), Ok(vec![Request::DifficultyChosen(Difficulty::Hard)]));
        assert_eq!(parse_command("start"), Ok(vec![Request::StartRequested]));
        assert_eq!(parse_command("quit"), Ok(vec![Request::Quit]));
        assert_eq!(parse_command("   "), Ok(vec![]));
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(
            parse_command("guess  Big Cat "),
            Ok(vec![Request::GuessSubmitted { guess: "Big Cat".to_string() }])
        );
        assert_eq!(
            parse_command(" Apple "),
            Ok(vec![Request::GuessSubmitted { guess: "Apple".to_string() }])
        );
    }

    #[test]
    fn stroke_expands_to_segments() {
        assert_eq!(
            parse_command("stroke 1,2 3,4 5,6"),
            Ok(vec![
                Request::StrokeBegin(Point::new(1, 2)),
                Request::StrokeDrawn(Point::new(3, 4)),
                Request::StrokeDrawn(Point::new(5, 6)),
                Request::StrokeEnd,
            ])
        );
        assert_eq!(parse_command("down 10 20"), Ok(vec![Request::StrokeBegin(Point::new(10, 20))]));
        assert_eq!(parse_command("move 11,21"), Ok(vec![Request::StrokeDrawn(Point::new(11, 21))]));
        assert!(matches!(parse_command("stroke 1;2"), Err(CommandError::BadPoint(_))));
        assert!(matches!(parse_command("stroke"), Err(CommandError::MissingArgument(..))));
    }

    #[test]
    fn tools() {
        assert_eq!(parse_command("save"), Ok(vec![Request::Export { path: None }]));
        assert_eq!(
            parse_command("save out/cat.png"),
            Ok(vec![Request::Export { path: Some(PathBuf::from("out/cat.png")) }])
        );
        assert_eq!(parse_command("brush 5"), Ok(vec![Request::BrushSize(5)]));
        assert!(matches!(parse_command("brush big"), Err(CommandError::BadSize(_))));
        assert_eq!(
            parse_command("color Midnight Blue"),
            Ok(vec![Request::BrushColor("Midnight Blue".to_string())])
        );
    }

    #[test]
    fn json_input_rejects_timer_events() {
        assert_eq!(parse_json(r#""StartRequested""#), Ok(vec![Request::StartRequested]));
        assert_eq!(parse_json(r#"{"Expiry":{"round":1}}"#), Err(CommandError::TimerRequest));
        assert!(matches!(parse_json("{nope"), Err(CommandError::Json(_))));
    }
}
