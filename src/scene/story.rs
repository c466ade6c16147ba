//! The proposal story and its typewriter reveal

use crate::consts::{STORY_CHAR_MS, STORY_LINE_PAUSE_MS};

/// Lines revealed on the proposal screen, in order
pub const STORY_LINES: &[&str] = &[
    "Hello there. Yes, you.",
    "I still remember the first time I said hello… mostly because I wanted to confirm there was another Kamba at Strath 🤣",
    "But I kind of knew this one would be different. Our worlds didn’t even look similar… yet somehow they aligned.",
    "Charming. Sensational. Fuuuun 😂 But what stood out the most? Your humility.",
    "Somewhere along the way, I grew to appreciate you deeply.",
    "10 years later… here we are.",
];

/// Separator appended after each finished line
pub const LINE_BREAK: &str = "\n\n";

/// Reveals lines one character at a time.
///
/// The first character appears as soon as the reveal starts, then one every
/// `STORY_CHAR_MS`. A finished line gets a `LINE_BREAK` one character-step
/// later, followed by a `STORY_LINE_PAUSE_MS` pause before the next line.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    /// Index in chars into the current line
    char_idx: usize,
    text: String,
    /// Time left until the next step
    wait_ms: f64,
    running: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(STORY_LINES.iter().map(|s| s.to_string()).collect())
    }
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            line: 0,
            char_idx: 0,
            text: String::new(),
            wait_ms: 0.0,
            running: false,
        }
    }

    /// Clear the text and begin revealing from the first line
    pub fn start(&mut self) {
        self.text.clear();
        self.line = 0;
        self.char_idx = 0;
        self.wait_ms = 0.0;
        self.running = true;
        self.advance(0.0);
    }

    /// Show everything at once (reduced motion)
    pub fn finish(&mut self) {
        self.running = true;
        while self.running {
            self.step();
        }
        self.wait_ms = 0.0;
    }

    /// Stop without touching the text shown so far
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Feed elapsed time; returns true if the text changed
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let before = self.text.len();
        self.wait_ms -= elapsed_ms;
        while self.running && self.wait_ms <= 0.0 {
            self.wait_ms += self.step();
        }
        self.text.len() != before
    }

    /// Perform one reveal step and return the delay before the next one
    fn step(&mut self) -> f64 {
        let Some(line) = self.lines.get(self.line) else {
            self.running = false;
            return 0.0;
        };
        match line.chars().nth(self.char_idx) {
            Some(c) => {
                self.text.push(c);
                self.char_idx += 1;
                STORY_CHAR_MS
            }
            None => {
                self.text.push_str(LINE_BREAK);
                self.line += 1;
                self.char_idx = 0;
                STORY_LINE_PAUSE_MS
            }
        }
    }

    /// Text revealed so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// All lines revealed
    pub fn is_done(&self) -> bool {
        !self.running && self.line >= self.lines.len()
    }

    /// Total reveal time from `start` until the last line break
    pub fn total_duration_ms(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.chars().count() as f64 * STORY_CHAR_MS)
            .sum::<f64>()
            + self.lines.len().saturating_sub(1) as f64 * STORY_LINE_PAUSE_MS
    }
}
