use std::io::{self, Write};

use protocol::{JsonMessage, Outcome};

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Json,
}

pub struct Observer {
    mode: Mode,
    out: Box<dyn Write + Send>,
}

impl Observer {
    pub fn new(mode: Mode, out: Box<dyn Write + Send>) -> Self {
        Self { mode, out }
    }

    pub fn stdout(mode: Mode) -> Self {
        Self::new(mode, Box::new(io::stdout()))
    }

    pub fn send(&mut self, resp: &Response) -> io::Result<()> {
        let line = match self.mode {
            Mode::Json => resp.ser()?,
            Mode::Text => render(resp),
        };
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

fn render(resp: &Response) -> String {
    match resp {
        Response::RoundStarted { round, word, drawer } => {
            format!("Round {}: {} draws. Word for the drawer only: {}\nType `start` when ready.", round, drawer, word)
        }
        Response::CountDown(secs) => format!("Time remaining: {}s", secs),
        Response::GuessRejected { guess } => format!("\"{}\" is incorrect, try again!", guess),
        Response::RoundResolved { outcome: Outcome::Correct, word, scorer } => match scorer {
            Some(player) => format!("Correct! The word was {}. Point to {}.", word, player),
            None => format!("Correct! The word was {}.", word),
        },
        Response::RoundResolved { word, .. } => format!("Time's up! The word was: {}", word),
        Response::ScoreChanged { player, score } => format!("{}: {}", player, score),
        Response::Notice { msg } => msg.clone(),
        Response::GameEnd(players) => {
            let scores: Vec<String> = players
                .iter()
                .map(|p| format!("{}: {}", p.id, p.score))
                .collect();
            if scores.is_empty() {
                "Game over.".to_string()
            } else {
                format!("Game over. {}", scores.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use protocol::{PlayerId, PlayerState};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn text_lines() {
        let buf = Shared::default();
        let mut observer = Observer::new(Mode::Text, Box::new(buf.clone()));
        observer.send(&Response::CountDown(7)).unwrap();
        observer.send(&Response::RoundResolved {
            outcome: Outcome::Expired,
            word: "cat".to_string(),
            scorer: None,
        }).unwrap();
        observer.send(&Response::GameEnd(vec![
            PlayerState { id: PlayerId::One, score: 2 },
            PlayerState { id: PlayerId::Two, score: 1 },
        ])).unwrap();

        assert_eq!(
            buf.text(),
            "Time remaining: 7s\nTime's up! The word was: cat\nGame over. Player 1: 2, Player 2: 1\n"
        );
    }

    #[test]
    fn json_lines_round_trip() {
        let buf = Shared::default();
        let mut observer = Observer::new(Mode::Json, Box::new(buf.clone()));
        let resp = Response::ScoreChanged { player: PlayerId::Two, score: 3 };
        observer.send(&resp).unwrap();

        let text = buf.text();
        let line = text.lines().next().unwrap();
        assert_eq!(Response::deser(line).unwrap(), resp);
    }
}
