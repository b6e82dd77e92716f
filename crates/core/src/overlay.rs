//! Two-line message overlay shown outside of play.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageOverlay {
    line1: String,
    line2: String,
}

impl MessageOverlay {
    pub fn new() -> Self {
        let mut overlay = Self::default();
        overlay.show_start();
        overlay
    }

    pub fn show_start(&mut self) {
        self.set_line1("Press SPACE to start!");
        self.set_line2("Press the right keys to get score!");
    }

    pub fn show_game_over(&mut self, final_score: u32) {
        self.line1.clear();
        self.line1.push_str("You scored: ");
        self.line1.push_str(&final_score.to_string());
        self.set_line2("Press SPACE to start a new game!");
    }

    pub fn set_line1(&mut self, text: &str) {
        self.line1.clear();
        self.line1.push_str(text);
    }

    pub fn set_line2(&mut self, text: &str) {
        self.line2.clear();
        self.line2.push_str(text);
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }
}
