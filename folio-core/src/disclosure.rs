//! Navigation disclosure — the collapsible section menu.
//!
//! The entire logical state is one boolean. A reveal fraction eases toward
//! the boolean over a fixed short duration so the overlay's height and
//! opacity animate on every flip; rapid toggling retargets the in-flight
//! animation rather than queueing.

use crate::catalog::Section;

/// Seconds for the overlay to fully open or close.
const REVEAL_SECS: f64 = 0.18;

#[derive(Debug, Clone)]
pub struct NavDisclosure {
    open: bool,
    reveal: f64,
    cursor: usize,
}

impl NavDisclosure {
    pub fn new() -> Self {
        Self {
            open: false,
            reveal: 0.0,
            cursor: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Animated presence in [0, 1]; drives overlay height and fade.
    pub fn reveal(&self) -> f64 {
        self.reveal
    }

    /// Flip open/closed. `Closed --toggle--> Open`, `Open --toggle--> Closed`.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn cursor(&self) -> Section {
        Section::from_index(self.cursor).unwrap_or(Section::Profile)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < Section::ALL.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Activate the item under the cursor. Selecting a destination always
    /// closes the overlay.
    pub fn select_item(&mut self) -> Section {
        self.open = false;
        self.cursor()
    }

    /// Ease the reveal fraction toward the current boolean.
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let target = if self.open { 1.0 } else { 0.0 };
        let step = dt / REVEAL_SECS;
        if self.reveal < target {
            self.reveal = (self.reveal + step).min(target);
        } else {
            self.reveal = (self.reveal - step).max(target);
        }
    }
}

impl Default for NavDisclosure {
    fn default() -> Self {
        Self::new()
    }
}
