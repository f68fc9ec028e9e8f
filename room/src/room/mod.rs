mod config;
mod state;
mod request;
mod error;
mod timer;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::channel;
use tracing::{debug, info, warn};

use canvas::Canvas;
use protocol::{Difficulty, Outcome};

use crate::consts::*;
use crate::observer::Observer;
use crate::types::*;
use error::{ErrorKind, RoomResult};
use state::{Session, Stage, State};
use timer::RoundTimer;
pub use config::Config;

pub struct Room {
    config: Config,
    state: State,
    // last round number handed out, never reset so timer events stay unique
    rounds: u32,
    canvas: Canvas,
    timer: Option<RoundTimer>,
    rng: StdRng,
    outbox: Vec<Response>,

    rm_rx: RoomRx,
    loopback: RoomTx,
}

impl Room {
    pub fn new(config: Config) -> Self {
        let (loopback, rm_rx) = channel::<Request>(ROOM_CHANNEL_SIZE);
        let (width, height) = config.canvas_size;
        let canvas = Canvas::new(width, height).with_brush(config.brush);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            state: State::new(),
            rounds: 0,
            canvas,
            timer: None,
            rng,
            outbox: Vec::new(),

            rm_rx,
            loopback,
        }
    }

    pub fn get_tx(&self) -> RoomTx {
        self.loopback.clone()
    }

    pub fn take_responses(&mut self) -> Vec<Response> {
        std::mem::take(&mut self.outbox)
    }

    pub fn dispatch(&mut self, req: Request) -> RoomResult<()> {
        use Stage::*;
        match (self.state.stage, req) {
            (_, Request::Quit) => {
                self.quit();
                Ok(())
            }
            (_, Request::BrushSize(size)) => Ok(self.canvas.brush_mut().set_size(size)?),
            (_, Request::BrushColor(color)) => Ok(self.canvas.brush_mut().set_color(&color)?),

            (Idle, Request::DifficultyChosen(difficulty)) => self.choose_difficulty(difficulty),
            (Idle, Request::StartRequested) => Err(ErrorKind::NoDifficulty),
            (DrawerReveal, Request::StartRequested) => self.start_drawing(),

            (Guessing, Request::GuessSubmitted { guess }) => self.check_guess(guess),
            (Guessing, Request::StrokeBegin(point)) => {
                self.canvas.begin_stroke(point);
                Ok(())
            }
            (Guessing, Request::StrokeDrawn(point)) => {
                if !self.canvas.extend_stroke(point) {
                    debug!(?point, "stroke point dropped");
                }
                Ok(())
            }
            (Guessing, Request::StrokeEnd) => {
                self.canvas.end_stroke();
                Ok(())
            }
            (Guessing, Request::Tick { round, remaining }) => self.tick(round, remaining),
            (Guessing, Request::Expiry { round }) => self.expire(round),

            (_, Request::Tick { round, .. } | Request::Expiry { round }) => {
                debug!(round, "timer event outside of guessing ignored");
                Ok(())
            }
            (stage, Request::StrokeBegin(_) | Request::StrokeDrawn(_) | Request::StrokeEnd) => {
                debug!(%stage, "stroke ignored");
                Ok(())
            }
            (stage, Request::Clear) if stage != Idle => {
                self.canvas.clear();
                Ok(())
            }
            (stage, Request::Export { path }) if stage != Idle => {
                self.export(path.as_deref());
                Ok(())
            }
            (stage, req) => Err(ErrorKind::WrongStage {
                request: req.name(),
                stage,
            }),
        }
    }

    /// Errors never end the game: they are logged and shown as a notice.
    pub fn dispatch_batch(&mut self, batch: Vec<Request>) {
        for req in request::order_batch(batch) {
            let name = req.name();
            if let Err(err) = self.dispatch(req) {
                warn!(request = name, error = %err, "request rejected");
                self.outbox.push(Response::Notice { msg: err.to_string() });
            }
        }
    }

    pub async fn step(&mut self) -> Vec<Response> {
        let mut batch = vec![];
        if let Some(req) = self.rm_rx.recv().await {
            batch.push(req);
        }
        while let Ok(req) = self.rm_rx.try_recv() {
            batch.push(req);
        }
        self.dispatch_batch(batch);
        self.take_responses()
    }

    pub async fn run(&mut self, observer: &mut Observer) {
        loop {
            let responses = self.step().await;
            let mut over = false;
            for resp in &responses {
                if let Err(err) = observer.send(resp) {
                    warn!(error = %err, "failed to deliver event");
                }
                over |= matches!(resp, Response::GameEnd(_));
            }
            if over {
                break;
            }
        }
    }

    fn current(&self) -> RoomResult<&Session> {
        self.state.session.as_ref().ok_or(ErrorKind::NoRound)
    }

    fn choose_difficulty(&mut self, difficulty: Difficulty) -> RoomResult<()> {
        let word = match self.config.load_lexicon(difficulty).next_word(&mut self.rng) {
            Ok(word) => word.to_string(),
            Err(_) => return Err(ErrorKind::EmptyLexicon(difficulty)),
        };
        info!(%difficulty, "game started");
        self.canvas.clear();
        self.state.session = Some(Session::new(self.rounds + 1, word));
        self.reveal()
    }

    fn reveal(&mut self) -> RoomResult<()> {
        let session = self.state.session.as_ref().ok_or(ErrorKind::NoRound)?;
        self.state.stage = Stage::DrawerReveal;
        self.rounds = session.round;
        info!(round = session.round, drawer = %session.drawer, "round started");
        self.outbox.push(Response::RoundStarted {
            round: session.round,
            word: session.word.clone(),
            drawer: session.drawer,
        });
        Ok(())
    }

    fn start_drawing(&mut self) -> RoomResult<()> {
        let round = self.current()?.round;
        self.stop_timer();
        self.timer = Some(RoundTimer::start(round, self.config.round_secs, self.get_tx()));
        self.state.stage = Stage::Guessing;
        self.outbox.push(Response::CountDown(self.config.round_secs));
        Ok(())
    }

    fn tick(&mut self, round: u32, remaining: u8) -> RoomResult<()> {
        let session = self.current()?;
        if session.round != round {
            debug!(round, current = session.round, "stale tick ignored");
            return Ok(());
        }
        let next = session.tick(remaining);
        self.outbox.push(Response::CountDown(next.countdown));
        self.state.session = Some(next);
        Ok(())
    }

    fn expire(&mut self, round: u32) -> RoomResult<()> {
        let current = self.current()?.round;
        if current != round {
            debug!(round, current, "stale expiry ignored");
            return Ok(());
        }
        self.resolve(Outcome::Expired)
    }

    fn check_guess(&mut self, guess: String) -> RoomResult<()> {
        if check_answer(&guess, &self.current()?.word) {
            self.resolve(Outcome::Correct)
        } else {
            debug!(%guess, "wrong guess");
            self.outbox.push(Response::GuessRejected { guess });
            Ok(())
        }
    }

    fn resolve(&mut self, outcome: Outcome) -> RoomResult<()> {
        self.stop_timer();
        self.state.stage = Stage::Resolved;

        let session = self.current()?;
        let (resolved, scorer) = match outcome {
            Outcome::Correct => (session.record_correct_guess(), Some(session.drawer)),
            _ => (session.expire(), None),
        };
        info!(round = resolved.round, ?outcome, word = %resolved.word, "round resolved");
        self.outbox.push(Response::RoundResolved {
            outcome: resolved.outcome,
            word: resolved.word.clone(),
            scorer,
        });
        if let Some(player) = scorer {
            self.outbox.push(Response::ScoreChanged {
                player,
                score: resolved.score(player),
            });
        }

        self.canvas.clear();
        let word = self.config.lexicon.next_word(&mut self.rng)?.to_string();
        self.state.session = Some(resolved.advance_turn(word));
        self.reveal()
    }

    fn quit(&mut self) {
        self.stop_timer();
        self.canvas.clear();
        let players = self
            .state
            .session
            .take()
            .map(|session| session.players.iter().map(|p| p.get_state()).collect::<Vec<_>>())
            .unwrap_or_default();
        self.state.stage = Stage::Idle;
        info!(difficulty = ?self.config.difficulty, "game ended");
        self.outbox.push(Response::GameEnd(players));
    }

    fn export(&self, path: Option<&Path>) {
        if path.is_none() {
            debug!("export cancelled");
        }
        if let Err(err) = self.canvas.export(path) {
            warn!(error = %err, "export failed");
        }
    }

    fn stop_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
        }
    }
}

fn check_answer(guess: &str, word: &str) -> bool {
    guess.trim().to_lowercase() == word.trim().to_lowercase()
}
