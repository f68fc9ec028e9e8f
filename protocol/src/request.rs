use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use crate::{Difficulty, JsonMessage, Point};

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
pub enum Request {
    DifficultyChosen(Difficulty),
    StartRequested,
    GuessSubmitted {
        guess: String,
    },
    StrokeBegin(Point),
    StrokeDrawn(Point),
    StrokeEnd,
    Clear,
    Export {
        path: Option<PathBuf>,
    },
    BrushSize(u8),
    BrushColor(String),
    Tick {
        round: u32,
        remaining: u8,
    },
    Expiry {
        round: u32,
    },
    Quit,
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::DifficultyChosen(_) => "difficulty",
            Request::StartRequested => "start",
            Request::GuessSubmitted { .. } => "guess",
            Request::StrokeBegin(_) => "stroke-begin",
            Request::StrokeDrawn(_) => "stroke",
            Request::StrokeEnd => "stroke-end",
            Request::Clear => "clear",
            Request::Export { .. } => "export",
            Request::BrushSize(_) => "brush-size",
            Request::BrushColor(_) => "brush-color",
            Request::Tick { .. } => "tick",
            Request::Expiry { .. } => "expiry",
            Request::Quit => "quit",
        }
    }

    pub fn is_timer(&self) -> bool {
        matches!(self, Request::Tick { .. } | Request::Expiry { .. })
    }
}

impl JsonMessage for Request {}
