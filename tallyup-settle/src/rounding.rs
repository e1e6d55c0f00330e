use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places transfers are quantized to.
pub const SCALE: u32 = 2;

/// One hundredth: the smallest reported transfer and the imbalance tolerance.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, SCALE);

/// Quantizes to cents, sending exact midpoints toward zero (`0.125 -> 0.12`).
pub fn round_half_down(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointTowardZero)
}
