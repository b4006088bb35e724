//! Dispatch abstraction over where actions are executed.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the studio state.
///
/// The local implementation mutates in-process state and drives the playback
/// backend directly. Front ends only need this trait.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
