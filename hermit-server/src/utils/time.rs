//! 时间工具函数 — 业务时区转换
//!
//! 入住/退房日期全部使用 `NaiveDate` (YYYY-MM-DD)，
//! 序列化后字符串字典序与日期序一致，可直接用于数据库比较。

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// 当前营业日 (业务时区的今天)
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// 当前 Unix 时间戳 (毫秒)，用于 created_at / updated_at
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
