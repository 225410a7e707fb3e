//! Construction-time paginator settings.

use std::time::Duration;

/// Default lifetime of a pagination session's controls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
/// Default number of items placed on one page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// How consecutive items are combined into a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinMode {
    /// Concatenate the items' display text with `separator`.
    Joined { separator: String },
    /// Keep the items as a list per page.
    Listed,
}

impl Default for JoinMode {
    fn default() -> Self {
        Self::Joined {
            separator: "\n".to_owned(),
        }
    }
}

/// What happens to the message when a session stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAction {
    /// Keep the controls on the message, all disabled.
    Disable,
    /// Remove the controls, leaving the rendered page.
    Detach,
    /// Replace the page with an expiry notice and remove the controls.
    Replace,
    /// Delete the message.
    Delete,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TimedOut,
    UserStopped,
}

#[derive(Debug, Clone)]
pub struct PaginatorConfig {
    pub per_page: usize,
    pub join: JoinMode,
    /// 0-based index of the page shown on start.
    pub initial_page: usize,
    pub stop_action: StopAction,
    pub timeout_action: StopAction,
    pub timeout: Duration,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            join: JoinMode::default(),
            initial_page: 0,
            stop_action: StopAction::Detach,
            timeout_action: StopAction::Disable,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PaginatorConfig {
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn join(mut self, join: JoinMode) -> Self {
        self.join = join;
        self
    }

    pub fn initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    pub fn stop_action(mut self, action: StopAction) -> Self {
        self.stop_action = action;
        self
    }

    pub fn timeout_action(mut self, action: StopAction) -> Self {
        self.timeout_action = action;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Stop action configured for the given stop reason.
    pub fn action_for(&self, reason: StopReason) -> StopAction {
        match reason {
            StopReason::TimedOut => self.timeout_action,
            StopReason::UserStopped => self.stop_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_detach_on_stop_and_disable_on_timeout() {
        let config = PaginatorConfig::default();

        assert_eq!(config.action_for(StopReason::UserStopped), StopAction::Detach);
        assert_eq!(config.action_for(StopReason::TimedOut), StopAction::Disable);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.join, JoinMode::Joined { separator: "\n".to_owned() });
    }

    #[test]
    fn setters_override_actions_per_reason() {
        let config = PaginatorConfig::default()
            .stop_action(StopAction::Delete)
            .timeout_action(StopAction::Replace);

        assert_eq!(config.action_for(StopReason::UserStopped), StopAction::Delete);
        assert_eq!(config.action_for(StopReason::TimedOut), StopAction::Replace);
    }
}
