use alloy_primitives::U256;

/// Decimals of one ether (1 ETH = 10^18 wei).
pub const ETHER_DECIMALS: u8 = 18;
/// Decimals of one gwei (1 gwei = 10^9 wei).
pub const GWEI_DECIMALS: u8 = 9;

/// Display precision for native currency amounts.
pub const ETHER_DISPLAY_PLACES: u8 = 6;
/// Display precision for gas prices.
pub const GWEI_DISPLAY_PLACES: u8 = 2;

/// Gas consumed by a plain value transfer.
pub const SIMPLE_TRANSFER_GAS: u64 = 21_000;
/// Typical gas consumed by an ERC-20 transfer.
pub const TOKEN_TRANSFER_GAS: u64 = 65_000;

/// Scale an integer amount of wei down by `10^decimals` and render it with
/// exactly `places` fractional digits.
///
/// The division is exact; rounding only happens on the last displayed digit,
/// with ties going to the even neighbour.
pub fn format_units(amount: U256, decimals: u8, places: u8) -> String {
    let divisor = pow10(decimals);
    let mut whole = amount / divisor;
    let remainder = amount % divisor;

    if places == 0 {
        if round_up(remainder, divisor, whole) {
            whole += U256::from(1u8);
        }
        return whole.to_string();
    }

    let fraction = if places >= decimals {
        remainder * pow10(places - decimals)
    } else {
        let scale = pow10(decimals - places);
        let mut fraction = remainder / scale;
        if round_up(remainder % scale, scale, fraction) {
            fraction += U256::from(1u8);
            if fraction == pow10(places) {
                fraction = U256::ZERO;
                whole += U256::from(1u8);
            }
        }
        fraction
    };

    format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = places as usize
    )
}

/// Render wei as ether with the standard display precision.
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS, ETHER_DISPLAY_PLACES)
}

/// Render wei as gwei with the standard display precision.
pub fn format_gwei(wei: U256) -> String {
    format_units(wei, GWEI_DECIMALS, GWEI_DISPLAY_PLACES)
}

/// Fee in wei for `gas_units` at `gas_price`. `None` on overflow.
pub fn estimate_cost(gas_price: U256, gas_units: u64) -> Option<U256> {
    gas_price.checked_mul(U256::from(gas_units))
}

/// Insert `,` between groups of three digits: `1234567` -> `1,234,567`.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pow10(exp: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exp))
}

// Half-to-even on the discarded remainder.
fn round_up(discarded: U256, scale: U256, kept: U256) -> bool {
    let doubled = discarded * U256::from(2u8);
    match doubled.cmp(&scale) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => kept.bit(0),
    }
}
