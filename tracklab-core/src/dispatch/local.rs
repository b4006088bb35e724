//! LocalDispatcher: Dispatcher implementation for local execution.

use tracklab_types::{Action, DispatchResult, Dispatcher};

use crate::playback::PlaybackBackend;
use crate::state::StudioState;

use super::{apply_side_effects, dispatch_action};

/// Local dispatcher that executes actions directly on in-process state.
///
/// Runs `dispatch_action` and then applies the collected playback side
/// effects, so every call returns a complete result.
pub struct LocalDispatcher<'a> {
    pub state: &'a mut StudioState,
    pub backend: &'a mut dyn PlaybackBackend,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(state: &'a mut StudioState, backend: &'a mut dyn PlaybackBackend) -> Self {
        Self { state, backend }
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        let mut effects = Vec::new();
        let mut result = dispatch_action(action, self.state, self.backend, &mut effects);
        apply_side_effects(&effects, self.backend, &mut result);
        result
    }
}
