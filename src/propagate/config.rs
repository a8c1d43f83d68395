//! Run configuration for the propagation driver.

use smol_str::SmolStr;

use crate::base::constants::{DECORATOR_SENTINEL, DEFAULT_MAX_PASSES};

/// Knobs of a propagation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationConfig {
    /// Upper bound on passes over the decorators.
    pub max_passes: usize,
    /// Name that marks an object as a decorator.
    pub sentinel: SmolStr,
    /// Register a graph node for every decorator's enclosing object before
    /// the first pass, instead of on first successful propagation.
    pub register_targets_upfront: bool,
    /// Stop as soon as a whole pass leaves the graph unchanged.
    pub stop_at_fixpoint: bool,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            sentinel: SmolStr::new_static(DECORATOR_SENTINEL),
            register_targets_upfront: true,
            stop_at_fixpoint: true,
        }
    }
}

impl PropagationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<SmolStr>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_upfront_registration(mut self, enabled: bool) -> Self {
        self.register_targets_upfront = enabled;
        self
    }

    pub fn with_fixpoint_stop(mut self, enabled: bool) -> Self {
        self.stop_at_fixpoint = enabled;
        self
    }
}
