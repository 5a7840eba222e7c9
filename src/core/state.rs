//! Core State trait for locomotion states.
//!
//! Every state the machine can be in implements this trait. The hooks mirror
//! the two scheduling channels of a simulation loop: `handle_input` runs on
//! the variable-rate input tick, `physics_update` on the fixed simulation
//! tick, and `update` once per rendered frame.

use crate::host::TickContext;
use std::fmt::Debug;

/// Lifecycle contract for a state of the locomotion machine.
///
/// All hooks are side-effect only. States never decide their own
/// transitions; the owning machine calls `exit` on the old state and
/// `enter` on the new one.
///
/// # Example
///
/// ```rust
/// use stride::core::State;
/// use stride::host::TickContext;
///
/// #[derive(Debug, Default)]
/// struct Frozen {
///     ticks: u32,
/// }
///
/// impl State for Frozen {
///     fn name(&self) -> &str {
///         "Frozen"
///     }
///
///     fn physics_update(&mut self, _ctx: &mut TickContext<'_>) {
///         self.ticks += 1;
///     }
/// }
///
/// let state = Frozen::default();
/// assert_eq!(state.name(), "Frozen");
/// ```
pub trait State: Debug {
    /// Get the state's name for display/logging.
    ///
    /// The name is the state's identity inside a machine.
    fn name(&self) -> &str;

    /// Called exactly once when the machine transitions into this state.
    ///
    /// Default implementation only reports the state name to the log.
    fn enter(&mut self) {
        log_entered(self.name());
    }

    /// Called exactly once when the machine transitions out of this state.
    ///
    /// Default implementation does nothing.
    fn exit(&mut self) {}

    /// Sample external input and cache it. Must not apply forces.
    fn handle_input(&mut self, _ctx: &TickContext<'_>) {}

    /// Per-frame logic outside of physics.
    fn update(&mut self, _ctx: &mut TickContext<'_>) {}

    /// Fixed-timestep motion computation and force application.
    fn physics_update(&mut self, _ctx: &mut TickContext<'_>) {}
}

/// Report that the state `name` was entered.
///
/// States that override `enter` call this to keep the default log line.
pub fn log_entered(name: &str) {
    log::info!("State : {}", name);
}

impl<T: State + ?Sized> State for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn enter(&mut self) {
        (**self).enter()
    }

    fn exit(&mut self) {
        (**self).exit()
    }

    fn handle_input(&mut self, ctx: &TickContext<'_>) {
        (**self).handle_input(ctx)
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        (**self).update(ctx)
    }

    fn physics_update(&mut self, ctx: &mut TickContext<'_>) {
        (**self).physics_update(ctx)
    }
}
