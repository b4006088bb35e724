use tracklab_types::{DispatchResult, PerformanceAction, SettingsUpdate, StatusLevel};

use crate::state::StudioState;

pub(super) fn dispatch_performance(
    action: PerformanceAction,
    state: &mut StudioState,
) -> DispatchResult {
    let enabled = match action {
        PerformanceAction::Toggle => !state.performance.performance_mode(),
        PerformanceAction::Set(enabled) => enabled,
    };

    let mut result = DispatchResult::none();
    if let Some(advisory) = state.performance.set_performance_mode(enabled) {
        log::info!(target: "performance", "performance mode on");
        result.push_status(StatusLevel::Info, advisory);
    }

    let mirror = SettingsUpdate { performance_mode: Some(enabled), ..SettingsUpdate::default() };
    if let Err(e) = state.projects.update_settings(&mirror) {
        log::warn!(target: "performance", "could not store performance mode: {}", e);
        result.push_status(StatusLevel::Error, e.to_string());
    }
    result
}

/// Re-estimate after the track set changed and surface the one-time
/// "consider performance mode" advisory.
pub(super) fn observe(state: &mut StudioState, result: &mut DispatchResult) {
    let metrics = state.performance_metrics();
    if let Some(advisory) = state.performance.observe(&metrics) {
        log::info!(target: "performance", "{}", advisory);
        result.push_status(StatusLevel::Warning, advisory);
    }
}
