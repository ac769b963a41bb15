use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `places` decimal places, half away from zero.
///
/// Ratings use one place and prices two. Every rounding in the catalog goes
/// through here.
#[must_use]
pub fn round_to_decimal(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}
