// 时间编码
// "HH:MM" 字符串与午夜起算分钟数之间的相互转换

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// 一天的分钟数，存储值必须落在 [0, MINUTES_PER_DAY) 内
pub const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeCodecError {
    #[error("invalid time of day {0:?}, expected HH:MM")]
    InvalidHour(String),

    #[error("minutes {0} out of range 0..=1439")]
    MinutesOutOfRange(i32),
}

/// "HH:MM" -> 分钟数
pub fn hour_to_minutes(value: &str) -> Result<i32, TimeCodecError> {
    // 时和分都只能是 1~2 位数字，chrono 会跳过数字前的空白
    let well_formed = value.split_once(':').is_some_and(|(hours, minutes)| {
        is_clock_part(hours) && is_clock_part(minutes)
    });
    if !well_formed {
        return Err(TimeCodecError::InvalidHour(value.to_string()));
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| TimeCodecError::InvalidHour(value.to_string()))?;

    Ok((time.hour() * 60 + time.minute()) as i32)
}

fn is_clock_part(part: &str) -> bool {
    (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// 分钟数 -> "HH:MM"
pub fn minutes_to_hour(minutes: i32) -> Result<String, TimeCodecError> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(TimeCodecError::MinutesOutOfRange(minutes));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_day_boundaries() {
        assert_eq!(hour_to_minutes("00:00"), Ok(0));
        assert_eq!(hour_to_minutes("23:59"), Ok(1439));
        assert_eq!(hour_to_minutes("09:05"), Ok(545));
        assert_eq!(hour_to_minutes("9:05"), Ok(545));
    }

    #[test]
    fn decodes_day_boundaries() {
        assert_eq!(minutes_to_hour(0).as_deref(), Ok("00:00"));
        assert_eq!(minutes_to_hour(1439).as_deref(), Ok("23:59"));
        assert_eq!(minutes_to_hour(545).as_deref(), Ok("09:05"));
    }

    #[test]
    fn every_clock_value_survives_a_round_trip() {
        for h in 0..24 {
            for m in 0..60 {
                let text = format!("{h:02}:{m:02}");
                let minutes = hour_to_minutes(&text).unwrap();
                assert!((0..MINUTES_PER_DAY).contains(&minutes));
                assert_eq!(minutes_to_hour(minutes).unwrap(), text);
            }
        }
    }

    #[test]
    fn rejects_malformed_hours() {
        for bad in [
            "24:00", "12:60", "1200", "ab:cd", "", "12:", ":30", "12:30:00", " 09:05", "09: 05",
            "\t9:05", "09:05 ", "09 :05", "+9:05", "009:05",
        ] {
            assert_eq!(
                hour_to_minutes(bad),
                Err(TimeCodecError::InvalidHour(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_minutes_outside_the_day() {
        assert_eq!(minutes_to_hour(-1), Err(TimeCodecError::MinutesOutOfRange(-1)));
        assert_eq!(
            minutes_to_hour(MINUTES_PER_DAY),
            Err(TimeCodecError::MinutesOutOfRange(1440))
        );
    }
}
