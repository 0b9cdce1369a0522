//! Miner status summary parsing and display formatting
//!
//! The backend reports xmrig's status JSON verbatim, both as the
//! `print_status` response and as the pushed `xmrig-status` event.

use serde::Deserialize;

use crate::common::prelude::*;

/// Parsed `{hashrate:{total:[n0,n1,n2]}, donate_level}` summary
#[derive(Debug, Clone, Deserialize)]
pub struct StatusSummary {
    pub hashrate: Hashrate,
    #[serde(default)]
    pub donate_level: Option<u8>,
}

/// 10s / 60s / 15m hashrate averages, each nullable while warming up
#[derive(Debug, Clone, Deserialize)]
pub struct Hashrate {
    pub total: [Option<f64>; 3],
}

impl StatusSummary {
    /// Parse a raw status payload. Malformed input is a recoverable
    /// protocol error; the caller skips the update cycle.
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::protocol(format!("malformed status payload: {}", e)))
    }
}

/// Rendered hashrate and donation figures for the home page.
///
/// Null slots render as "0 H/s" so the display is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashrateDisplay {
    pub h10s: String,
    pub h60s: String,
    pub h15m: String,
    pub donate: String,
}

impl Default for HashrateDisplay {
    fn default() -> Self {
        Self {
            h10s: format_hashrate(None),
            h60s: format_hashrate(None),
            h15m: format_hashrate(None),
            donate: "0 %".to_string(),
        }
    }
}

impl HashrateDisplay {
    /// Apply a parsed summary. Donation level is kept when absent.
    pub fn apply(&mut self, summary: &StatusSummary) {
        self.h10s = format_hashrate(summary.hashrate.total[0]);
        self.h60s = format_hashrate(summary.hashrate.total[1]);
        self.h15m = format_hashrate(summary.hashrate.total[2]);
        if let Some(level) = summary.donate_level {
            self.donate = format!("{} %", level);
        }
    }
}

/// Truncated (not rounded) integer hashrate with unit
pub fn format_hashrate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} H/s", v.trunc() as i64),
        None => "0 H/s".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_summary() {
        let summary =
            StatusSummary::parse(r#"{"hashrate":{"total":[1234.7,null,5678.2]},"donate_level":1}"#)
                .unwrap();
        assert_eq!(summary.hashrate.total[0], Some(1234.7));
        assert_eq!(summary.hashrate.total[1], None);
        assert_eq!(summary.donate_level, Some(1));
    }

    #[test]
    fn test_parse_without_donate_level() {
        let summary = StatusSummary::parse(r#"{"hashrate":{"total":[null,null,null]}}"#).unwrap();
        assert_eq!(summary.donate_level, None);
    }

    #[test]
    fn test_parse_malformed_is_recoverable() {
        let err = StatusSummary::parse("not json").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_format_truncates_not_rounds() {
        assert_eq!(format_hashrate(Some(1234.7)), "1234 H/s");
        assert_eq!(format_hashrate(Some(5678.2)), "5678 H/s");
        assert_eq!(format_hashrate(Some(0.9)), "0 H/s");
    }

    #[test]
    fn test_format_null_policy() {
        assert_eq!(format_hashrate(None), "0 H/s");
    }

    #[test]
    fn test_display_apply() {
        let mut display = HashrateDisplay::default();
        let summary =
            StatusSummary::parse(r#"{"hashrate":{"total":[1234.7,null,5678.2]},"donate_level":1}"#)
                .unwrap();
        display.apply(&summary);

        assert_eq!(display.h10s, "1234 H/s");
        assert_eq!(display.h60s, "0 H/s");
        assert_eq!(display.h15m, "5678 H/s");
        assert_eq!(display.donate, "1 %");
    }

    #[test]
    fn test_display_keeps_donate_when_absent() {
        let mut display = HashrateDisplay::default();
        display.donate = "1 %".to_string();

        let summary = StatusSummary::parse(r#"{"hashrate":{"total":[10.0,20.0,30.0]}}"#).unwrap();
        display.apply(&summary);

        assert_eq!(display.donate, "1 %");
    }
}
