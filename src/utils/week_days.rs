// 星期编码
// 存储时以逗号拼接（"1,3,5"），传输时为数组

use thiserror::Error;

const SEPARATOR: char = ',';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeekDaysError {
    #[error("invalid weekday entry {0:?} in stored value")]
    InvalidEntry(String),
}

/// [1, 3, 5] -> "1,3,5"
pub fn join_week_days(days: &[u8]) -> String {
    days.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// "1,3,5" -> [1, 3, 5]，空字符串对应空数组
pub fn split_week_days(stored: &str) -> Result<Vec<u8>, WeekDaysError> {
    if stored.trim().is_empty() {
        return Ok(Vec::new());
    }

    stored
        .split(SEPARATOR)
        .map(|entry| {
            entry
                .trim()
                .parse::<u8>()
                .map_err(|_| WeekDaysError::InvalidEntry(entry.to_string()))
        })
        .collect()
}
