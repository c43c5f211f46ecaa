//! Activation gating: hard disabled/loading gates followed by an optional throttle window.

use std::time::Duration;

use crate::config::ControlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of one activation attempt.
pub enum GateDecision {
    /// The activation passes and is forwarded to listeners.
    Allowed,
    /// Dropped because the control is disabled.
    DroppedDisabled,
    /// Dropped because the control is loading.
    DroppedLoading,
    /// Dropped because the previous accepted activation is still inside the throttle window.
    DroppedThrottled,
}

impl GateDecision {
    /// Returns whether the activation passed the gate.
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Pure decision predicate derived from a [`ControlConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    /// Hard disabled gate.
    pub disabled: bool,
    /// Hard loading gate.
    pub loading: bool,
    /// Throttle window, `None` when throttling is off or the window is empty.
    pub throttle: Option<Duration>,
}

impl GatePolicy {
    /// Derives the policy for `config`.
    pub fn from_config(config: &ControlConfig) -> Self {
        let throttle = (config.use_throttle && !config.throttle_duration.is_zero())
            .then_some(config.throttle_duration);
        Self {
            disabled: config.disabled,
            loading: config.loading,
            throttle,
        }
    }

    /// Decides an attempt at `now` given the last accepted activation time.
    ///
    /// Rules are evaluated in order and the first match wins: disabled, loading, throttle,
    /// allowed.
    pub fn decide(&self, last_fired_at: Option<Duration>, now: Duration) -> GateDecision {
        if self.disabled {
            return GateDecision::DroppedDisabled;
        }
        if self.loading {
            return GateDecision::DroppedLoading;
        }
        if let (Some(window), Some(last)) = (self.throttle, last_fired_at) {
            if now.saturating_sub(last) < window {
                return GateDecision::DroppedThrottled;
            }
        }
        GateDecision::Allowed
    }
}

/// Per-control gate holding the time of the last accepted activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionGate {
    last_fired_at: Option<Duration>,
}

impl InteractionGate {
    /// Creates a gate with no accepted activation recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last accepted activation.
    pub fn last_fired_at(&self) -> Option<Duration> {
        self.last_fired_at
    }

    /// Decides an activation at `now` under `config`; only [`GateDecision::Allowed`] records
    /// `now` as the new throttle anchor.
    pub fn attempt_activate(&mut self, config: &ControlConfig, now: Duration) -> GateDecision {
        let decision = GatePolicy::from_config(config).decide(self.last_fired_at, now);
        if decision.is_allowed() {
            self.last_fired_at = Some(now);
        }
        decision
    }
}
