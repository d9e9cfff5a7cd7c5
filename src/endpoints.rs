//! bankcode-jp.com REST API endpoint constants.

/// Base URL for the bankcode-jp.com v3 REST API.
pub const BANKCODE_JP_BASE_URL: &str = "https://apis.bankcode-jp.com/v3";

/// Resource path for bank records.
///
/// A single bank lives at `{base}/banks/{code}`.
pub const BANKS: &str = "/banks";
