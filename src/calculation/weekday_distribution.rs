//! Ordinary weekday hour distribution.
//!
//! Splits a weekday's worked hours into regular, overtime-50, overtime-100,
//! and pending (deficit) buckets. This distribution is also the fallback for
//! weekend interval-splitting whenever punch data is insufficient.

use rust_decimal::Decimal;

use crate::config::CategorizationRules;

/// The result of distributing one weekday's worked hours.
///
/// Invariant: `regular + extra_50 + extra_100` equals the worked hours
/// passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayDistribution {
    /// Hours paid at the standard rate.
    pub regular: Decimal,
    /// Overtime hours paid at 150%.
    pub extra_50: Decimal,
    /// Overtime hours paid at 200%.
    pub extra_100: Decimal,
    /// Shortfall versus a full shift; zero when the day has time off.
    pub pending: Decimal,
}

impl WeekdayDistribution {
    /// An all-zero distribution.
    pub fn zero() -> Self {
        Self {
            regular: Decimal::ZERO,
            extra_50: Decimal::ZERO,
            extra_100: Decimal::ZERO,
            pending: Decimal::ZERO,
        }
    }
}

/// Distributes worked hours per the ordinary weekday rule.
///
/// Given worked hours `H`, the full-shift threshold `F`, and the overtime-50
/// threshold `K`:
/// - `regular = min(H, F)`
/// - the first `K` hours beyond `F` go to overtime-50, the remainder to
///   overtime-100
/// - `pending = F - H` when `H < F` and the day has no time-off marker
///
/// # Example
///
/// ```
/// use hours_engine::calculation::distribute_weekday_hours;
/// use hours_engine::config::CategorizationRules;
/// use rust_decimal::Decimal;
///
/// let rules = CategorizationRules::default(); // F = 8, K = 2
/// let result = distribute_weekday_hours(Decimal::from(11), false, &rules);
/// assert_eq!(result.regular, Decimal::from(8));
/// assert_eq!(result.extra_50, Decimal::from(2));
/// assert_eq!(result.extra_100, Decimal::from(1));
/// assert_eq!(result.pending, Decimal::ZERO);
/// ```
pub fn distribute_weekday_hours(
    hours_worked: Decimal,
    has_time_off: bool,
    rules: &CategorizationRules,
) -> WeekdayDistribution {
    if hours_worked <= Decimal::ZERO {
        return WeekdayDistribution::zero();
    }

    let full_shift = rules.full_shift_hours;

    if hours_worked <= full_shift {
        let pending = if !has_time_off && hours_worked < full_shift {
            full_shift - hours_worked
        } else {
            Decimal::ZERO
        };
        return WeekdayDistribution {
            regular: hours_worked,
            extra_50: Decimal::ZERO,
            extra_100: Decimal::ZERO,
            pending,
        };
    }

    let extra = hours_worked - full_shift;
    let extra_50 = extra.min(rules.overtime_50_threshold);
    let extra_100 = extra - extra_50;

    WeekdayDistribution {
        regular: full_shift,
        extra_50,
        extra_100,
        pending: Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> CategorizationRules {
        CategorizationRules::default()
    }

    // WD-001: exact full shift
    #[test]
    fn test_wd_001_exact_full_shift() {
        let result = distribute_weekday_hours(dec("8"), false, &rules());
        assert_eq!(result.regular, dec("8"));
        assert_eq!(result.extra_50, Decimal::ZERO);
        assert_eq!(result.extra_100, Decimal::ZERO);
        assert_eq!(result.pending, Decimal::ZERO);
    }

    // WD-002: overtime split across both tiers
    #[test]
    fn test_wd_002_overtime_split() {
        let result = distribute_weekday_hours(dec("11"), false, &rules());
        assert_eq!(result.regular, dec("8"));
        assert_eq!(result.extra_50, dec("2"));
        assert_eq!(result.extra_100, dec("1"));
        assert_eq!(result.pending, Decimal::ZERO);
    }

    // WD-003: overtime inside the 50% tier only
    #[test]
    fn test_wd_003_overtime_within_tier_one() {
        let result = distribute_weekday_hours(dec("9.5"), false, &rules());
        assert_eq!(result.regular, dec("8"));
        assert_eq!(result.extra_50, dec("1.5"));
        assert_eq!(result.extra_100, Decimal::ZERO);
    }

    // WD-004: deficit day
    #[test]
    fn test_wd_004_deficit_day() {
        let result = distribute_weekday_hours(dec("6"), false, &rules());
        assert_eq!(result.regular, dec("6"));
        assert_eq!(result.pending, dec("2"));
    }

    // WD-005: time off suppresses pending
    #[test]
    fn test_wd_005_time_off_suppresses_pending() {
        let result = distribute_weekday_hours(dec("4"), true, &rules());
        assert_eq!(result.regular, dec("4"));
        assert_eq!(result.pending, Decimal::ZERO);
    }

    // WD-006: zero hours
    #[test]
    fn test_wd_006_zero_hours() {
        let result = distribute_weekday_hours(Decimal::ZERO, false, &rules());
        assert_eq!(result, WeekdayDistribution::zero());
    }

    #[test]
    fn test_custom_thresholds() {
        let rules = CategorizationRules {
            full_shift_hours: dec("6"),
            overtime_50_threshold: dec("1"),
            ..CategorizationRules::default()
        };
        let result = distribute_weekday_hours(dec("9"), false, &rules);
        assert_eq!(result.regular, dec("6"));
        assert_eq!(result.extra_50, dec("1"));
        assert_eq!(result.extra_100, dec("2"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Buckets always partition the worked hours exactly
            #[test]
            fn buckets_sum_to_hours_worked(minutes in 0i64..=24 * 60, has_time_off: bool) {
                let hours = Decimal::new(minutes, 0) / Decimal::new(60, 0);
                let result = distribute_weekday_hours(hours, has_time_off, &rules());
                prop_assert_eq!(result.regular + result.extra_50 + result.extra_100, hours);
            }

            #[test]
            fn pending_is_zero_with_time_off(minutes in 0i64..=24 * 60) {
                let hours = Decimal::new(minutes, 0) / Decimal::new(60, 0);
                let result = distribute_weekday_hours(hours, true, &rules());
                prop_assert_eq!(result.pending, Decimal::ZERO);
            }

            #[test]
            fn no_bucket_is_negative(minutes in 0i64..=24 * 60, has_time_off: bool) {
                let hours = Decimal::new(minutes, 0) / Decimal::new(60, 0);
                let result = distribute_weekday_hours(hours, has_time_off, &rules());
                prop_assert!(result.regular >= Decimal::ZERO);
                prop_assert!(result.extra_50 >= Decimal::ZERO);
                prop_assert!(result.extra_100 >= Decimal::ZERO);
                prop_assert!(result.pending >= Decimal::ZERO);
            }
        }
    }
}
