/// Abstraction over time sources.
/// Implementations: SystemTimeProvider (production), MockTimeProvider (testing).
pub trait TimeProvider {
    /// Current time in milliseconds from an arbitrary epoch.
    fn now_ms(&self) -> u64;
}

/// System time provider using std::time::Instant.
pub struct SystemTimeProvider {
    start: std::time::Instant,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Mock time provider for deterministic testing.
pub struct MockTimeProvider {
    current_ms: std::cell::Cell<u64>,
}

impl MockTimeProvider {
    pub fn new() -> Self {
        Self {
            current_ms: std::cell::Cell::new(0),
        }
    }

    pub fn set_time(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.current_ms.set(self.current_ms.get() + delta_ms);
    }
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_provider_advance() {
        let tp = MockTimeProvider::new();
        assert_eq!(tp.now_ms(), 0);
        tp.advance(1_000);
        assert_eq!(tp.now_ms(), 1_000);
        tp.advance(250);
        assert_eq!(tp.now_ms(), 1_250);
    }

    #[test]
    fn mock_time_provider_set() {
        let tp = MockTimeProvider::new();
        tp.set_time(30_000);
        assert_eq!(tp.now_ms(), 30_000);
    }

    #[test]
    fn system_time_provider_monotonic() {
        let tp = SystemTimeProvider::new();
        let t1 = tp.now_ms();
        let t2 = tp.now_ms();
        assert!(t2 >= t1);
    }
}
