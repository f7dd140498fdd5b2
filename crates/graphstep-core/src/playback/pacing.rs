use std::time::Duration;

/// Waits between successive events. Owned by the presentation side; the
/// engine itself never sleeps.
pub trait Pacer {
    fn pause(&mut self);
}

/// Sleep for a fixed duration between events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// No pacing; drain as fast as the presenter allows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// Pick a pacer for a step delay; zero means no pacing
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(delay))
    }
}
