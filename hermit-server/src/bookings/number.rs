//! Booking Number Generator
//!
//! Human-readable numbers of the form `BK<yyyymmddHHMMSS><4-digit suffix>`,
//! e.g. `BK202406011430077341`. Timestamp plus random suffix is best-effort
//! only; the unique index on `booking.number` catches the residual collisions
//! and the manager retries with a fresh suffix.

use chrono::Utc;
use chrono_tz::Tz;
use rand::Rng;

/// Generate a booking number in the business timezone
pub fn generate(tz: Tz) -> String {
    let stamp = Utc::now().with_timezone(&tz).format("%Y%m%d%H%M%S");
    let suffix: u16 = rand::thread_rng().gen_range(0..10000);
    format!("BK{}{:04}", stamp, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_has_expected_shape() {
        let number = generate(chrono_tz::Europe::Madrid);
        assert!(number.starts_with("BK"));
        assert_eq!(number.len(), 2 + 14 + 4);
        assert!(number[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn consecutive_numbers_rarely_collide() {
        // 抽样检查：同一秒内生成也应因随机后缀而不同
        let a = generate(chrono_tz::Europe::Madrid);
        let b = generate(chrono_tz::Europe::Madrid);
        let c = generate(chrono_tz::Europe::Madrid);
        assert!(a != b || b != c);
    }
}
