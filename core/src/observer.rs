//! Observer contract for the UI or other listeners.
//!
//! Listeners receive every game-facing line synchronously, in
//! registration order. Registration is append-only for the life of the
//! engine. Listeners must not panic; the engine does not guard against
//! callback failures.

/// A single text-message callback.
pub trait GameObserver {
    fn on_message(&mut self, message: &str);
}

impl<F: FnMut(&str)> GameObserver for F {
    fn on_message(&mut self, message: &str) {
        self(message);
    }
}
