use rand::Rng;

/// Injectable fault source for the mock suggestion endpoint
///
/// The storefront's "server" fails a small share of suggestion calls purely
/// to exercise client degradation paths. Hiding the coin flip behind this
/// trait lets tests force either branch deterministically.
pub trait FaultInjector: Send + Sync {
    fn should_fail(&self) -> bool;
}

/// Fails a fixed share of calls at random
#[derive(Debug, Clone)]
pub struct RandomFaults {
    rate: f64,
}

impl RandomFaults {
    /// `rate` is clamped to [0, 1]
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }
}

impl FaultInjector for RandomFaults {
    fn should_fail(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.rate
    }
}

/// Deterministic injector: always or never fails
#[derive(Debug, Clone, Copy)]
pub struct FixedFaults(pub bool);

impl FaultInjector for FixedFaults {
    fn should_fail(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_never_fails() {
        let faults = RandomFaults::new(0.0);
        assert!((0..100).all(|_| !faults.should_fail()));
    }

    #[test]
    fn test_full_rate_always_fails() {
        let faults = RandomFaults::new(1.0);
        assert!((0..100).all(|_| faults.should_fail()));
    }

    #[test]
    fn test_rate_is_clamped() {
        assert!(RandomFaults::new(7.5).should_fail());
        assert!(!RandomFaults::new(-1.0).should_fail());
    }

    #[test]
    fn test_fixed_faults() {
        assert!(FixedFaults(true).should_fail());
        assert!(!FixedFaults(false).should_fail());
    }
}
