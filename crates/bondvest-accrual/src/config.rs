//! Configuration for accrual and status calculations.

use bondvest_core::types::WITHDRAWAL_NOTICE_DAYS;
use serde::{Deserialize, Serialize};

/// What happens to accrual once a withdrawal has been requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeAccrual {
    /// Interest keeps accruing through the notice window, as for `active`.
    #[default]
    Continue,
    /// Value is frozen at the moment the withdrawal was requested.
    FreezeAtRequest,
}

/// Configuration for the accrual engine and status resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualConfig {
    /// Accrual behaviour during `withdrawal_notice`.
    pub notice_accrual: NoticeAccrual,

    /// Length of the withdrawal notice window in days, used when an
    /// investment carries no persisted payout deadline.
    pub withdrawal_notice_days: i64,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            notice_accrual: NoticeAccrual::Continue,
            withdrawal_notice_days: WITHDRAWAL_NOTICE_DAYS,
        }
    }
}

impl AccrualConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that freezes value at the withdrawal request.
    #[must_use]
    pub fn freeze_at_request() -> Self {
        Self {
            notice_accrual: NoticeAccrual::FreezeAtRequest,
            ..Self::default()
        }
    }

    /// Sets the notice-window accrual behaviour.
    #[must_use]
    pub fn with_notice_accrual(mut self, mode: NoticeAccrual) -> Self {
        self.notice_accrual = mode;
        self
    }

    /// Sets the notice window length.
    #[must_use]
    pub fn with_withdrawal_notice_days(mut self, days: i64) -> Self {
        self.withdrawal_notice_days = days;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AccrualConfig::default();
        assert_eq!(config.notice_accrual, NoticeAccrual::Continue);
        assert_eq!(config.withdrawal_notice_days, 90);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AccrualConfig::new()
            .with_notice_accrual(NoticeAccrual::FreezeAtRequest)
            .with_withdrawal_notice_days(60);
        assert_eq!(config.notice_accrual, NoticeAccrual::FreezeAtRequest);
        assert_eq!(config.withdrawal_notice_days, 60);
        assert_eq!(
            AccrualConfig::freeze_at_request().notice_accrual,
            NoticeAccrual::FreezeAtRequest
        );
    }

    #[test]
    fn test_serde_partial() {
        let parsed: AccrualConfig =
            serde_json::from_str(r#"{"notice_accrual": "freeze_at_request"}"#).unwrap();
        assert_eq!(parsed.notice_accrual, NoticeAccrual::FreezeAtRequest);
        assert_eq!(parsed.withdrawal_notice_days, 90);
    }
}
