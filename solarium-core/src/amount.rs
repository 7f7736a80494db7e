//! Lamport amounts and SOL conversion.
//!
//! Balances arrive from the ledger as integer lamports. Conversion to SOL
//! is exact: integer division by 10^9 with the remainder printed as nine
//! fractional digits. Truncation, never rounding: reproducibility of the
//! rendered balance depends on it.

use core::fmt;
use core::ops::{Add, Sub};

/// Lamports per SOL (10^9).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// A balance in lamports, the atomic unit of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lamports(u64);

impl Lamports {
    /// Zero lamports.
    pub const ZERO: Self = Self(0);

    /// One SOL in lamports.
    pub const ONE_SOL: Self = Self(LAMPORTS_PER_SOL);

    /// Create from a raw lamport count.
    #[must_use]
    pub const fn new(lamports: u64) -> Self {
        Self(lamports)
    }

    /// Raw lamport value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Convert to a SOL decimal amount.
    #[must_use]
    pub const fn to_sol(self) -> Sol {
        Sol(self.0)
    }
}

impl fmt::Display for Lamports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lamports", self.0)
    }
}

impl Add for Lamports {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Lamports {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for Lamports {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A SOL amount with exactly nine fractional digits.
///
/// Wraps the underlying lamport count so the decimal rendering stays
/// exact; `Display` truncates, it never rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sol(u64);

impl Sol {
    /// Whole-SOL part of the amount.
    #[must_use]
    pub const fn whole(&self) -> u64 {
        self.0 / LAMPORTS_PER_SOL
    }

    /// Fractional part in lamports (0..10^9).
    #[must_use]
    pub const fn fractional_lamports(&self) -> u64 {
        self.0 % LAMPORTS_PER_SOL
    }

    /// The underlying lamport count.
    #[must_use]
    pub const fn as_lamports(&self) -> Lamports {
        Lamports(self.0)
    }
}

impl fmt::Display for Sol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.whole(), self.fractional_lamports())
    }
}
