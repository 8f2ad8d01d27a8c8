//! Simulation controller: owns the state and the run lifecycle.
//!
//! The controller is purely reactive: it never ticks itself. An external
//! driver calls [`Controller::tick`]; the controller's job is to own the
//! current [`SimState`], hand out read access, keep at most one driver
//! handle alive across `start`/`pause`/`resume`/`reset`, and feed the
//! per-tick observer and statistics.

use std::fmt;

use tracing::{debug, info};

use crate::common::SimError;
use crate::pipeline::Slot;
use crate::sim::driver::{DriverSpawner, TickDriver};
use crate::sim::scheduler::advance;
use crate::sim::state::SimState;
use crate::stats::SimStats;

/// Per-tick observer, invoked with each freshly computed state.
pub type TickObserver = Box<dyn FnMut(&SimState)>;

/// Owns the simulation state and its cycle-advancing lifecycle.
pub struct Controller {
    state: SimState,
    driver: Option<Box<dyn TickDriver>>,
    spawner: Option<DriverSpawner>,
    observer: Option<TickObserver>,
    stats: SimStats,
}

impl Controller {
    /// Controller with no driver spawner; ticks are pumped manually.
    pub fn new() -> Controller {
        Controller {
            state: SimState::initial(),
            driver: None,
            spawner: None,
            observer: None,
            stats: SimStats::default(),
        }
    }

    /// Controller that obtains a fresh driver handle from `spawner` on
    /// every `start` and `resume`.
    pub fn with_spawner(spawner: DriverSpawner) -> Controller {
        let mut controller = Controller::new();
        controller.spawner = Some(spawner);
        controller
    }

    /// Registers the per-tick observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: TickObserver) {
        self.observer = Some(observer);
    }

    /// Current state (the read model).
    ///
    /// Total: the empty initial state is a well-defined read target.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Current state of a started simulation.
    ///
    /// # Errors
    ///
    /// [`SimError::NoActiveRun`] when no `start` has created a run, or
    /// `reset` has discarded it.
    pub fn active(&self) -> Result<&SimState, SimError> {
        if self.state.cycle == 0 {
            return Err(SimError::NoActiveRun);
        }
        Ok(&self.state)
    }

    /// Statistics accumulated since the last `start`.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Starts a run at cycle 1. An empty program behaves exactly as
    /// [`Controller::reset`].
    ///
    /// Any prior driver is cancelled before the new state becomes
    /// observable, so a stale tick can never land on the fresh run.
    pub fn start(&mut self, program: Vec<Slot>) {
        self.cancel_driver();
        if program.is_empty() {
            self.reset();
            return;
        }
        info!(slots = program.len(), "starting simulation");
        self.stats = SimStats::default();
        self.state = SimState::at_start(program);
        self.spawn_driver();
    }

    /// Discards the run: cancels the driver and restores the empty
    /// initial state.
    pub fn reset(&mut self) {
        self.cancel_driver();
        self.state = SimState::initial();
        self.stats = SimStats::default();
    }

    /// Freezes the run: cancels the driver and clears `running`, keeping
    /// `cycle` and `slots` intact. No-op when not running.
    pub fn pause(&mut self) {
        if self.state.running {
            self.cancel_driver();
            self.state.running = false;
            debug!(cycle = self.state.cycle, "paused");
        }
    }

    /// Resumes a paused, unfinished run; the only state change is
    /// `running`, so no cycle is skipped or repeated. No-op otherwise.
    pub fn resume(&mut self) {
        if !self.state.running && !self.state.finished && self.state.cycle > 0 {
            self.state.running = true;
            debug!(cycle = self.state.cycle, "resumed");
            self.spawn_driver();
        }
    }

    /// Advances one cycle. Called by the driver, never by the controller
    /// itself; safe to call at any time since a paused or finished state
    /// is left untouched.
    pub fn tick(&mut self) {
        if !self.state.running || self.state.finished {
            return;
        }
        let next = advance(&self.state);
        self.stats.record(&self.state, &next);
        self.state = next;
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state);
        }
        if self.state.finished {
            self.cancel_driver();
        }
    }

    fn spawn_driver(&mut self) {
        if let Some(spawner) = self.spawner.as_mut() {
            self.driver = Some(spawner());
        }
    }

    fn cancel_driver(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            driver.cancel();
        }
    }
}

impl Default for Controller {
    /// Returns the default value.
    fn default() -> Self {
        Controller::new()
    }
}

impl Drop for Controller {
    /// A controller torn down mid-run must not leak a live driver.
    fn drop(&mut self) {
        self.cancel_driver();
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("driver_active", &self.driver.is_some())
            .finish_non_exhaustive()
    }
}
