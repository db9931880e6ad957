/// Identifies one repeating tick. 32 bits so it fits a scalar message
/// argument on every target; wraps after `u32::MAX` runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct TickToken(pub u32);

/// Source of periodic refresh ticks.
///
/// Implementations deliver ticks back to the owner tagged with the token
/// they were scheduled with. Delivery is up to the host.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval_ms: u64, token: TickToken);
    fn cancel(&mut self, token: TickToken);
}
