use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasscodeError {
    #[error("passcode does not match")]
    Mismatch,
}

/// Compares a trimmed attempt against the secret.
pub fn check_passcode(attempt: &str, secret: &str) -> Result<(), PasscodeError> {
    if attempt.trim() == secret {
        Ok(())
    } else {
        Err(PasscodeError::Mismatch)
    }
}

/// State behind the gate form: the text being typed and how many
/// submissions have been rejected so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasscodeForm {
    attempt: String,
    failures: u32,
}

impl PasscodeForm {
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// The card shakes after the first rejected submission, and replays the
    /// animation each time `failures` changes.
    pub fn is_shaking(&self) -> bool {
        self.failures > 0
    }

    pub fn input(&mut self, value: String) {
        self.attempt = value;
    }

    /// On mismatch the attempt is cleared and the failure count bumped.
    pub fn submit(&mut self, secret: &str) -> Result<(), PasscodeError> {
        let result = check_passcode(&self.attempt, secret);
        if result.is_err() {
            self.attempt.clear();
            self.failures = self.failures.saturating_add(1);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "bea-maangas";

    #[test]
    fn exact_secret_is_accepted() {
        assert_eq!(check_passcode("bea-maangas", SECRET), Ok(()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(check_passcode("  bea-maangas\n", SECRET), Ok(()));
    }

    #[test]
    fn near_misses_are_rejected() {
        for attempt in ["", "bea", "Bea-Maangas", "bea maangas", "bea-maangas!"] {
            assert_eq!(check_passcode(attempt, SECRET), Err(PasscodeError::Mismatch));
        }
    }

    #[test]
    fn wrong_submit_clears_attempt_and_counts_failure() {
        let mut form = PasscodeForm::default();
        form.input("hello".to_string());

        assert!(form.submit(SECRET).is_err());
        assert_eq!(form.attempt(), "");
        assert_eq!(form.failures(), 1);
        assert!(form.is_shaking());

        form.input("again".to_string());
        assert!(form.submit(SECRET).is_err());
        assert_eq!(form.failures(), 2);
    }

    #[test]
    fn right_submit_keeps_state() {
        let mut form = PasscodeForm::default();
        form.input("bea-maangas".to_string());

        assert!(form.submit(SECRET).is_ok());
        assert_eq!(form.attempt(), "bea-maangas");
        assert_eq!(form.failures(), 0);
        assert!(!form.is_shaking());
    }

    #[test]
    fn error_message() {
        assert_eq!(PasscodeError::Mismatch.to_string(), "passcode does not match");
    }
}
