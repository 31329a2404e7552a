//! Page-level state for both screens, kept out of the components so the
//! transitions can be checked without a browser.

use rand::Rng;

use crate::confetti::{make_confetti, Particle};
use crate::config;

/// Whether the gate has been passed. Only ever goes from locked to unlocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlock {
    unlocked: bool,
}

impl Unlock {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Returns true only for the call that flips the flag.
    pub fn unlock(&mut self) -> bool {
        let first = !self.unlocked;
        self.unlocked = true;
        first
    }
}

/// What the courting page is showing on top of its card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtingState {
    show_success: bool,
    show_proof: bool,
    confetti: Vec<Particle>,
}

impl CourtingState {
    pub fn is_success_shown(&self) -> bool {
        self.show_success
    }

    pub fn is_proof_shown(&self) -> bool {
        self.show_proof
    }

    pub fn confetti(&self) -> &[Particle] {
        &self.confetti
    }

    /// Fresh batch of confetti and the success overlay. Nothing hides the
    /// overlay again.
    pub fn yes<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.confetti = make_confetti(rng, config::CONFETTI_BATCH);
        self.show_success = true;
    }

    pub fn open_proof(&mut self) {
        self.show_proof = true;
    }

    pub fn close_proof(&mut self) {
        self.show_proof = false;
    }
}
