use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
const SCALE: i64 = 10_000;
// 10^19 already exceeds i64::MAX, so larger magnitudes never fit.
const MAX_WHOLE_DIGITS: i64 = 19;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary amount stored as an integer count of ten-thousandths.
///
/// Balances are kept in fixed point so repeated deposits and withdrawals never
/// accumulate floating-point drift. Parsing rounds to 4 decimal places.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 125_000);
/// assert_eq!(amount.to_string_4dp(), "12.5000");
/// assert_eq!(amount.to_string(), "12.5");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn from_i64(value: i64) -> Self {
        Money(value)
    }

    /// Whole units, e.g. `Money::from_units(75)` is 75.0000. Saturates at the
    /// `i64` bounds.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        if bd.is_zero() {
            return Ok(Money::zero());
        }
        // A huge exponent would make the scaled integer enormous before the
        // range check below could reject it.
        let (_, exponent) = bd.as_bigint_and_exponent();
        if exponent < -MAX_WHOLE_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

/// Shortest form: `75`, `12.5`, `0.0001`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.to_string_4dp();
        f.write_str(full.trim_end_matches('0').trim_end_matches('.'))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
