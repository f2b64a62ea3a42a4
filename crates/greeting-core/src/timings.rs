//! Fixed delays driving the greeting timeline.

use std::time::Duration;

/// The three fixed delays of the greeting flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Time each message stays on screen before advancing.
    pub advance: Duration,
    /// Pause between choosing "No" and the acknowledgement notice.
    pub ack: Duration,
    /// Time from celebration start to navigating to the surprise view.
    pub navigate: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            advance: Duration::from_millis(5000),
            ack: Duration::from_millis(500),
            navigate: Duration::from_millis(3000),
        }
    }
}

impl Timings {
    /// Shortened delays (1/10th) for manually stepping through the flow.
    pub fn quick() -> Self {
        let base = Self::default();
        Self {
            advance: base.advance / 10,
            ack: base.ack / 10,
            navigate: base.navigate / 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_flow_constants() {
        let t = Timings::default();
        assert_eq!(t.advance, Duration::from_millis(5000));
        assert_eq!(t.ack, Duration::from_millis(500));
        assert_eq!(t.navigate, Duration::from_millis(3000));
    }

    #[test]
    fn test_quick_is_proportional() {
        let t = Timings::default();
        let q = Timings::quick();
        assert_eq!(q.advance * 10, t.advance);
        assert_eq!(q.ack * 10, t.ack);
        assert_eq!(q.navigate * 10, t.navigate);
    }
}
