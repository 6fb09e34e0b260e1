use chrono::Utc;

/// Current instant in epoch milliseconds.
///
/// This is the single source of truth for "now": all tracker bookkeeping
/// (goal ids, streak starts, pause windows) uses this unit, and shells pass
/// the value into the time-dependent service operations.
pub fn current_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_is_past_2024() {
        // 2024-01-01T00:00:00Z in epoch milliseconds.
        assert!(current_time_ms() > 1_704_067_200_000);
    }
}
