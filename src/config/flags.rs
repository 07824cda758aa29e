//! `SKIP_UPKEEP` / `SKIP_TASKS` handling.

/// Suppresses gated commands when set.
pub const SKIP_UPKEEP: &str = "SKIP_UPKEEP";

/// Re-enables gated commands even when `SKIP_UPKEEP` is set.
pub const SKIP_TASKS: &str = "SKIP_TASKS";

/// The two skip switches read from the environment.
///
/// A switch counts as set only when its variable is present and non-empty,
/// so `SKIP_UPKEEP=` behaves like an unset variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipFlags {
    pub skip_upkeep: bool,
    pub skip_tasks: bool,
}

impl SkipFlags {
    /// Read both switches from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read both switches through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        Self {
            skip_upkeep: is_set(SKIP_UPKEEP),
            skip_tasks: is_set(SKIP_TASKS),
        }
    }

    /// Whether gated commands may run.
    pub fn allows_upkeep(&self) -> bool {
        !self.skip_upkeep || self.skip_tasks
    }
}
