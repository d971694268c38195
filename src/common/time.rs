//! Time-related utilities with clock abstraction for testability.
//!
//! Message stamps are wall-clock strings in the durable log's existing
//! convention: `MM/DD/YYYY, HH:MM AM|PM` (12-hour, UTC).

use chrono::{TimeZone, Utc};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp in milliseconds
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_timestamp()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp in milliseconds
pub fn get_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as a message stamp,
/// e.g. `06/15/2024, 02:30 PM`.
pub fn format_date_sent(timestamp_millis: i64) -> String {
    let seconds = timestamp_millis.div_euclid(1000);
    let nanos = (timestamp_millis.rem_euclid(1000) * 1_000_000) as u32;
    match Utc.timestamp_opt(seconds, nanos) {
        chrono::LocalResult::Single(dt) => dt.format("%m/%d/%Y, %I:%M %p").to_string(),
        // Out-of-range timestamps only occur with a broken clock; stamp epoch instead
        _ => Utc
            .timestamp_opt(0, 0)
            .unwrap()
            .format("%m/%d/%Y, %I:%M %p")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_non_zero_timestamp() {
        // テスト項目: SystemClock が 0 以外のタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_timestamp() {
        // テスト項目: FixedClock が固定されたタイムスタンプを返す
        // given (前提条件):
        let fixed_time = 1234567890123;
        let clock = FixedClock::new(fixed_time);

        // when (操作):
        let timestamp = clock.now_millis();

        // then (期待する結果):
        assert_eq!(timestamp, fixed_time);
    }

    #[test]
    fn test_fixed_clock_returns_consistent_timestamp() {
        // テスト項目: FixedClock が複数回呼び出しても同じタイムスタンプを返す
        // given (前提条件):
        let fixed_time = 9876543210987;
        let clock = FixedClock::new(fixed_time);

        // when (操作):
        let timestamp1 = clock.now_millis();
        let timestamp2 = clock.now_millis();

        // then (期待する結果):
        assert_eq!(timestamp1, fixed_time);
        assert_eq!(timestamp2, fixed_time);
    }

    #[test]
    fn test_format_date_sent_morning() {
        // テスト項目: 午前のタイムスタンプが 12 時間表記でフォーマットされる
        // given (前提条件):
        // 2024-06-15 09:05:00 UTC
        let timestamp = 1718442300000;

        // when (操作):
        let result = format_date_sent(timestamp);

        // then (期待する結果):
        assert_eq!(result, "06/15/2024, 09:05 AM");
    }

    #[test]
    fn test_format_date_sent_afternoon() {
        // テスト項目: 午後のタイムスタンプが PM 表記でフォーマットされる
        // given (前提条件):
        // 2024-06-15 14:30:00 UTC
        let timestamp = 1718461800000;

        // when (操作):
        let result = format_date_sent(timestamp);

        // then (期待する結果):
        assert_eq!(result, "06/15/2024, 02:30 PM");
    }

    #[test]
    fn test_format_date_sent_epoch() {
        // テスト項目: エポックのタイムスタンプが正しくフォーマットされる
        // given (前提条件):
        let timestamp = 0;

        // when (操作):
        let result = format_date_sent(timestamp);

        // then (期待する結果):
        assert_eq!(result, "01/01/1970, 12:00 AM");
    }
}
