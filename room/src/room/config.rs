use canvas::Brush;
use lexicon::{Difficulty, FileSource, Lexicon};

use crate::consts::ROUND_SECS;

pub struct Config {
    pub source: FileSource,
    pub round_secs: u8,
    pub canvas_size: (u32, u32),
    pub brush: Brush,
    pub seed: Option<u64>,

    pub difficulty: Option<Difficulty>,
    pub lexicon: Lexicon,
}

impl Config {
    pub fn new(source: FileSource) -> Self {
        Self {
            source,
            round_secs: ROUND_SECS,
            canvas_size: (canvas::DEFAULT_WIDTH, canvas::DEFAULT_HEIGHT),
            brush: Brush::default(),
            seed: None,

            difficulty: None,
            lexicon: Lexicon::default(),
        }
    }

    pub fn load_lexicon(&mut self, difficulty: Difficulty) -> &Lexicon {
        self.lexicon = Lexicon::load(&self.source, difficulty);
        self.difficulty = Some(difficulty);
        &self.lexicon
    }
}
