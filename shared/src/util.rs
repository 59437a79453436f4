use chrono::{DateTime, Utc};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 获取当前 UTC 时间
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Generate a `<prefix>-<millis>` id that is not yet taken.
///
/// Ids are timestamp based like the ones the public site has always written
/// (`lead-1718000000000`). Two records created within the same millisecond
/// get a `-1`, `-2`, ... suffix so ids stay unique within a collection.
pub fn unique_prefixed_id(prefix: &str, is_taken: impl Fn(&str) -> bool) -> String {
    prefixed_id_at(prefix, now_millis(), is_taken)
}

/// Same as [`unique_prefixed_id`] with an explicit timestamp.
pub fn prefixed_id_at(prefix: &str, millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{prefix}-{millis}");
    if !is_taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or(base)
}

/// Next numeric id: the current timestamp, bumped past the largest existing id.
///
/// Saturates at `i64::MAX`; a collection already holding that id gets it again.
pub fn next_numeric_id(existing: impl IntoIterator<Item = i64>) -> i64 {
    let max = existing.into_iter().max().unwrap_or(0);
    now_millis().max(max.saturating_add(1))
}
