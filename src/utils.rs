// src/utils.rs
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format large numbers in a human-readable way
pub fn format_number(num: Decimal) -> String {
    let num = num.to_f64().unwrap_or(0.0);

    if num.abs() >= 1_000_000_000.0 {
        format!("{:.2}B", num / 1_000_000_000.0)
    } else if num.abs() >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num.abs() >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}

/// Format a percentage, keeping more precision for tiny shares
pub fn format_percentage(pct: Decimal) -> String {
    if pct >= Decimal::ONE || pct == Decimal::ZERO {
        format!("{}%", pct.round_dp(2).normalize())
    } else {
        format!("{}%", pct.round_dp(6).normalize())
    }
}

/// What percentage of `whole` is `part`, by magnitude.
///
/// `None` when `whole` is not positive or the result does not fit a `Decimal`.
pub fn calculate_share_percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.abs()
        .checked_div(whole)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Validate EVM-style address format (what Hyperliquid uses for users)
pub fn is_valid_wallet_address(address: &str) -> bool {
    // 42 characters starting with 0x
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}
