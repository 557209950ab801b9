use ahash::AHashSet;
use parking_lot::Mutex;

/// Shared probe-URL cache, the only mutable state shared between workers.
/// Grows for the whole run, never pruned.
#[derive(Debug, Default)]
pub struct SeenSet {
    inner: Mutex<AHashSet<String>>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff `url` was not yet present. Check-then-insert is one
    /// critical section; the lock is held only for the insert, never across
    /// network I/O.
    pub fn check_and_mark(&self, url: &str) -> bool {
        self.inner.lock().insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mark_wins() {
        let seen = SeenSet::new();
        assert!(seen.check_and_mark("http://example.test/admin"));
        assert!(!seen.check_and_mark("http://example.test/admin"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn distinct_urls_are_independent() {
        let seen = SeenSet::new();
        assert!(seen.check_and_mark("http://example.test/a"));
        assert!(seen.check_and_mark("http://example.test/b"));
        assert_eq!(seen.len(), 2);
    }
}
