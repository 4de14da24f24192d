use num_bigint::BigUint;
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

/// Numeric type usable as edge capacity and flow.
///
/// Subtraction is only applied where the result is known to be non-negative,
/// so unsigned and arbitrary-precision types work without underflow.
pub trait Capacity:
    Clone + Debug + Display + PartialOrd + Add<Output = Self> + Sub<Output = Self>
{
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// True for values that may be used as a capacity (rejects negatives and NaN).
    fn is_valid_capacity(&self) -> bool {
        *self >= Self::zero()
    }

    /// Sum of both values, or `None` if it does not fit the type.
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self.clone() + other.clone())
    }

    /// Sum of both values, clamped to the largest representable value.
    fn saturating_add(&self, other: &Self) -> Self {
        self.clone() + other.clone()
    }
}

macro_rules! integer_capacity {
    ($($t:ty),*) => {
        $(
            impl Capacity for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(&self, other: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *other)
                }

                fn saturating_add(&self, other: &Self) -> Self {
                    <$t>::saturating_add(*self, *other)
                }
            }
        )*
    };
}

integer_capacity!(u32, u64, u128, i64);

impl Capacity for f64 {
    fn zero() -> Self {
        0.0
    }
}

impl Capacity for BigUint {
    fn zero() -> Self {
        BigUint::default()
    }
}

pub fn min<C: Capacity>(a: C, b: C) -> C {
    if b < a {
        b
    } else {
        a
    }
}
