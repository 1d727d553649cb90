//! Capability interfaces for the submission lifecycle's outward
//! effects. Injected into the core so it stays testable without a
//! browser shell.

/// Surfaces transient messages to the user. Fire-and-forget; an
/// implementation must not panic.
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
    fn info(&self, text: &str);
}

/// Performs a full navigation to a destination screen. Invoked only
/// after a successful submission.
pub trait Navigator {
    fn go_to(&self, path: &str);
}
