//! The tick-driver seam.
//!
//! The engine never decides *when* a cycle elapses. An external driver
//! (a wall-clock timer, a UI button, a test harness) calls
//! [`Controller::tick`](crate::sim::Controller::tick). The controller's
//! side of the contract: hold at most one cancellable handle at a time,
//! and cancel it on every `start`, `pause`, `reset`, completion, and
//! teardown path.

/// A cancellable handle to an external tick source.
pub trait TickDriver {
    /// Stops future ticks. Must not block, and must tolerate being called
    /// more than once: overlapping teardown paths may each cancel.
    fn cancel(&mut self);
}

/// Factory the controller invokes whenever a run starts or resumes.
pub type DriverSpawner = Box<dyn FnMut() -> Box<dyn TickDriver>>;

/// Driver for embeddings that pump `tick` themselves (CLIs, tests).
///
/// Cancellation is a no-op: a straggler tick against a paused or finished
/// state already passes through the scheduler unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDriver;

impl TickDriver for NullDriver {
    fn cancel(&mut self) {}
}
