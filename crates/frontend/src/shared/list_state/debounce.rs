//! Debounce of the search box.
//!
//! Each keystroke takes a ticket; when its timer fires the ticket settles
//! only if no later keystroke happened in between.

#[derive(Debug, Clone, Default)]
pub struct SearchDebouncer {
    generation: u64,
    pending: Option<String>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(text.into());
        self.generation
    }

    /// Text to apply when `ticket` is still the latest input.
    pub fn settle(&mut self, ticket: u64) -> Option<String> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops whatever is pending, e.g. when the box is cleared explicitly.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_keystroke_settles() {
        let mut d = SearchDebouncer::new();
        let a = d.input("r");
        let b = d.input("ru");
        let c = d.input("rus");
        assert_eq!(d.settle(a), None);
        assert_eq!(d.settle(b), None);
        assert_eq!(d.settle(c), Some("rus".to_string()));
        assert!(!d.is_pending());
        // A ticket settles at most once.
        assert_eq!(d.settle(c), None);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut d = SearchDebouncer::new();
        let t = d.input("acme");
        d.cancel();
        assert_eq!(d.settle(t), None);
    }

    #[test]
    fn test_separate_pauses_each_settle() {
        let mut d = SearchDebouncer::new();
        let first = d.input("ac");
        assert_eq!(d.settle(first), Some("ac".to_string()));
        let second = d.input("acme");
        assert_eq!(d.settle(second), Some("acme".to_string()));
    }
}
