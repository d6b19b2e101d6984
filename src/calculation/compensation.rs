//! Deficit compensation algorithm.
//!
//! At the end of the period, accumulated deficit (pending) hours are offset
//! against overtime: overtime-50 compensates 1:1, then overtime-100
//! compensates at a 1:1.5 exchange rate, reflecting its higher value.

use rust_decimal::Decimal;

use crate::models::CompensationResult;

/// One hour of overtime-100 offsets this many deficit hours.
const EXTRA_100_EXCHANGE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates the end-of-period deficit compensation.
///
/// 1. Offset pending against overtime-50 one for one.
/// 2. Offset the remainder against overtime-100 at 1:1.5.
/// 3. Report the net overtime left in each bucket and the unresolved
///    deficit carried to the next period.
///
/// The division converting compensated deficit back into consumed
/// overtime-100 hours is guarded: when nothing was compensated at 100%,
/// the net bucket is the original total.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::calculate_compensation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_compensation(
///     Decimal::from(3), // extra-50
///     Decimal::from(2), // extra-100
///     Decimal::from(4), // pending
/// );
/// assert_eq!(result.compensated_with_50, Decimal::from(3));
/// assert_eq!(result.compensated_with_100, Decimal::from(1));
/// assert_eq!(result.net_extra_hours_50, Decimal::ZERO);
/// assert_eq!(result.remaining_pending_hours, Decimal::ZERO);
/// // 2 - 1/1.5 hours of overtime-100 remain
/// let expected = Decimal::from(2) - Decimal::from(1) / Decimal::from_str("1.5").unwrap();
/// assert_eq!(result.net_extra_hours_100, expected);
/// ```
pub fn calculate_compensation(
    extra_hours_50: Decimal,
    extra_hours_100: Decimal,
    pending_hours: Decimal,
) -> CompensationResult {
    let mut remaining = pending_hours;
    let mut compensated_with_50 = Decimal::ZERO;
    let mut compensated_with_100 = Decimal::ZERO;

    if remaining > Decimal::ZERO && extra_hours_50 > Decimal::ZERO {
        compensated_with_50 = remaining.min(extra_hours_50);
        remaining -= compensated_with_50;
    }

    if remaining > Decimal::ZERO && extra_hours_100 > Decimal::ZERO {
        let max_compensation = extra_hours_100 * EXTRA_100_EXCHANGE_RATE;
        compensated_with_100 = remaining.min(max_compensation);
        remaining -= compensated_with_100;
    }

    let net_extra_hours_50 = extra_hours_50 - compensated_with_50;
    let net_extra_hours_100 = if compensated_with_100 > Decimal::ZERO {
        extra_hours_100 - compensated_with_100 / EXTRA_100_EXCHANGE_RATE
    } else {
        extra_hours_100
    };

    CompensationResult {
        compensated_with_50,
        compensated_with_100,
        net_extra_hours_50,
        net_extra_hours_100,
        remaining_pending_hours: remaining,
    }
}
