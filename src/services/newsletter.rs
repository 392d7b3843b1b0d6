/// Errors a mailing-list provider can report
#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("Newsletter provider unavailable: {0}")]
    Unavailable(String),
}

/// Mailing-list collaborator behind the newsletter form.
pub trait NewsletterSignup: Send + Sync {
    fn subscribe(&self, email: &str) -> Result<(), NewsletterError>;
}

/// Placeholder until a real provider is wired in. Accepts everything and
/// only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSignup;

impl NewsletterSignup for NoopSignup {
    fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
        log::info!("Newsletter signup not wired; ignoring {email}");
        Ok(())
    }
}

/// What a form submission did.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; the collaborator was not called.
    Ignored,
    Submitted,
    Failed,
}

/// Hand a form entry to `signup`. The address is trimmed and blank input is
/// dropped. Failures are logged, never surfaced.
pub fn submit(signup: &dyn NewsletterSignup, input: &str) -> SubmitOutcome {
    let email = input.trim();
    if email.is_empty() {
        return SubmitOutcome::Ignored;
    }
    match signup.subscribe(email) {
        Ok(()) => SubmitOutcome::Submitted,
        Err(e) => {
            log::warn!("Newsletter signup failed: {e}");
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recording(Mutex<Vec<String>>);

    impl NewsletterSignup for Recording {
        fn subscribe(&self, email: &str) -> Result<(), NewsletterError> {
            self.0.lock().unwrap().push(email.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_noop_accepts_anything() {
        assert!(NoopSignup.subscribe("").is_ok());
        assert!(NoopSignup.subscribe("hello@example.com").is_ok());
    }

    struct Down;

    impl NewsletterSignup for Down {
        fn subscribe(&self, _email: &str) -> Result<(), NewsletterError> {
            Err(NewsletterError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn test_submit_trims_address() {
        let signup = Recording(Mutex::new(Vec::new()));
        assert_eq!(submit(&signup, "  a@b.c \n"), SubmitOutcome::Submitted);
        assert_eq!(submit(&signup, "d@e.f"), SubmitOutcome::Submitted);
        assert_eq!(*signup.0.lock().unwrap(), vec!["a@b.c".to_string(), "d@e.f".to_string()]);
    }

    #[test]
    fn test_submit_ignores_blank_input() {
        let signup = Recording(Mutex::new(Vec::new()));
        assert_eq!(submit(&signup, ""), SubmitOutcome::Ignored);
        assert_eq!(submit(&signup, "   \t"), SubmitOutcome::Ignored);
        assert!(signup.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_reports_provider_failure() {
        assert_eq!(submit(&Down, "a@b.c"), SubmitOutcome::Failed);
    }
}
