//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pesos                                            │
//! │    Chilean Pesos carry no minor unit in this system, so Money counts   │
//! │    whole CLP in an i64. Line totals, subtotal, and IVA are exact       │
//! │    integer arithmetic; the only rounding point is the IVA calculation  │
//! │    and it is pinned to one rule.                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cotiza_core::money::{Money, TaxRate};
//!
//! // Create from whole pesos (preferred)
//! let price = Money::from_clp(27_000);
//!
//! // Arithmetic operations
//! let line_total = price * 100;                  // $2.700.000
//! let iva = line_total.calculate_iva(TaxRate::from_bps(1900));
//!
//! // NEVER do this:
//! // let bad = Money::from_float(27000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1900 bps = 19% (Chilean IVA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Chilean Pesos.
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values never arise from document input
///   (quantities and prices are coerced non-negative), but the type does not
///   forbid them so arithmetic stays closed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use cotiza_core::money::Money;
    ///
    /// let price = Money::from_clp(27_000);
    /// assert_eq!(price.clp(), 27_000);
    /// ```
    #[inline]
    pub const fn from_clp(pesos: i64) -> Self {
        Money(pesos)
    }

    /// Returns the value in whole pesos.
    #[inline]
    pub const fn clp(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates IVA at the given rate, rounding to the nearest peso with
    /// ties away from zero.
    ///
    /// ## The Pinned Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  NEAREST PESO, TIES AWAY FROM ZERO                                  │
    /// │                                                                     │
    /// │  subtotal = $50  → IVA 19% = 9.5  → $10                            │
    /// │  subtotal = $100 → IVA 19% = 19.0 → $19                            │
    /// │  subtotal = $200 → IVA 19% = 38.0 → $38                            │
    /// │                                                                     │
    /// │  For the non-negative subtotals this document produces, this is    │
    /// │  exactly the half-up rounding the original spreadsheet-style app   │
    /// │  applied, so historical totals reproduce digit for digit.          │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math only: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides the rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use cotiza_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_clp(5_400_000);
    /// let iva = subtotal.calculate_iva(TaxRate::from_bps(1900));
    /// assert_eq!(iva.clp(), 1_026_000);
    /// ```
    pub fn calculate_iva(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        let iva = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_clp(iva as i64)
    }

    /// Formats the amount the way the document displays it: `$` symbol,
    /// `.` as thousands separator, zero decimal places (es-CL, CLP).
    ///
    /// Display-only: the exported CSV carries raw integers, and nothing ever
    /// parses this string back.
    ///
    /// ## Example
    /// ```rust
    /// use cotiza_core::money::Money;
    ///
    /// assert_eq!(Money::from_clp(0).format_clp(), "$0");
    /// assert_eq!(Money::from_clp(27_000).format_clp(), "$27.000");
    /// assert_eq!(Money::from_clp(5_400_000).format_clp(), "$5.400.000");
    /// ```
    pub fn format_clp(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

        if self.0 < 0 {
            grouped.push('-');
        }
        grouped.push('$');

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        grouped
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display delegates to the es-CL formatting; it is what the totals panel
/// and any log line show.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_clp())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sum of line totals.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clp() {
        let money = Money::from_clp(27_000);
        assert_eq!(money.clp(), 27_000);
    }

    #[test]
    fn test_format_clp() {
        assert_eq!(Money::from_clp(0).format_clp(), "$0");
        assert_eq!(Money::from_clp(5).format_clp(), "$5");
        assert_eq!(Money::from_clp(950).format_clp(), "$950");
        assert_eq!(Money::from_clp(5_000).format_clp(), "$5.000");
        assert_eq!(Money::from_clp(27_000).format_clp(), "$27.000");
        assert_eq!(Money::from_clp(100_000).format_clp(), "$100.000");
        assert_eq!(Money::from_clp(5_400_000).format_clp(), "$5.400.000");
        assert_eq!(Money::from_clp(6_426_000).format_clp(), "$6.426.000");
    }

    #[test]
    fn test_format_clp_negative() {
        assert_eq!(Money::from_clp(-550).format_clp(), "-$550");
        assert_eq!(Money::from_clp(-1_026_000).format_clp(), "-$1.026.000");
    }

    #[test]
    fn test_display_matches_format() {
        assert_eq!(format!("{}", Money::from_clp(27_000)), "$27.000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_clp(22_000);
        let b = Money::from_clp(5_000);

        assert_eq!((a + b).clp(), 27_000);
        assert_eq!((a - b).clp(), 17_000);
        assert_eq!((a * 100).clp(), 2_200_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [22_000, 27_000, 5_000]
            .into_iter()
            .map(|p| Money::from_clp(p) * 100)
            .sum();
        assert_eq!(total.clp(), 5_400_000);
    }

    #[test]
    fn test_iva_basic() {
        // $200 at 19% = $38 exactly
        let amount = Money::from_clp(200);
        let iva = amount.calculate_iva(TaxRate::from_bps(1900));
        assert_eq!(iva.clp(), 38);
    }

    #[test]
    fn test_iva_tie_rounds_away_from_zero() {
        // $50 at 19% = 9.5 → $10 (ties away from zero)
        let amount = Money::from_clp(50);
        let iva = amount.calculate_iva(TaxRate::from_bps(1900));
        assert_eq!(iva.clp(), 10);

        // $150 at 19% = 28.5 → $29
        let amount = Money::from_clp(150);
        assert_eq!(amount.calculate_iva(TaxRate::from_bps(1900)).clp(), 29);
    }

    #[test]
    fn test_iva_rounds_down_below_half() {
        // $170 at 19% = 32.3 → $32
        let amount = Money::from_clp(170);
        assert_eq!(amount.calculate_iva(TaxRate::from_bps(1900)).clp(), 32);
    }

    #[test]
    fn test_iva_seed_scenario() {
        // The seed document: 100×22000 + 100×27000 + 100×5000 = 5.400.000
        let subtotal = Money::from_clp(5_400_000);
        let iva = subtotal.calculate_iva(TaxRate::from_bps(1900));
        assert_eq!(iva.clp(), 1_026_000);
        assert_eq!((subtotal + iva).clp(), 6_426_000);
    }

    #[test]
    fn test_iva_zero() {
        let zero = Money::zero();
        assert_eq!(zero.calculate_iva(TaxRate::from_bps(1900)).clp(), 0);
    }

    #[test]
    fn test_tax_rate_percentage() {
        let rate = TaxRate::from_bps(1900);
        assert_eq!(rate.bps(), 1900);
        assert!((rate.percentage() - 19.0).abs() < 0.001);
    }
}
