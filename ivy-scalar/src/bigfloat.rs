use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use ivy_error::{IvyResult, ivy_bail};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Float, One, ToPrimitive, Zero};

/// Mantissa bits needed to hold any finite `f64` without rounding.
pub const F64_PREC: u32 = 53;

/// A binary floating point number whose mantissa carries at most [`BigFloat::prec`] bits.
///
/// The value is stored exactly as `mantissa * 2^exponent`. Rounding happens only on
/// construction, to the nearest representable value with ties to even, so decoding an `f32` or
/// `f64` at a precision of at least [`F64_PREC`] bits reproduces the source value exactly.
///
/// There is no NaN; infinities are signed. Equality and ordering compare values, not precisions.
#[derive(Clone, Debug)]
pub struct BigFloat {
    value: Repr,
    prec: u32,
}

#[derive(Clone, Debug)]
enum Repr {
    /// The mantissa is odd unless it is zero, in which case the exponent is zero too.
    Finite { mantissa: BigInt, exponent: i64 },
    Infinite(Sign),
}

impl BigFloat {
    /// Zero at the given precision.
    pub fn zero(prec: u32) -> Self {
        Self {
            value: Repr::Finite {
                mantissa: BigInt::zero(),
                exponent: 0,
            },
            prec,
        }
    }

    /// Positive or negative infinity at the given precision.
    pub fn infinity(negative: bool, prec: u32) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Self {
            value: Repr::Infinite(sign),
            prec,
        }
    }

    /// Decode a 64-bit float, rounding its mantissa to `prec` bits.
    ///
    /// # Errors
    ///
    /// Fails when `prec` is zero or `value` is NaN.
    pub fn from_f64(value: f64, prec: u32) -> IvyResult<Self> {
        check_prec(prec)?;
        if value.is_nan() {
            ivy_bail!("NaN has no arbitrary-precision float representation");
        }
        if value.is_infinite() {
            return Ok(Self::infinity(value.is_sign_negative(), prec));
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut mantissa = BigInt::from(mantissa);
        if sign < 0 {
            mantissa = -mantissa;
        }
        Ok(Self::round(mantissa, i64::from(exponent), prec))
    }

    /// Decode a 32-bit float, rounding its mantissa to `prec` bits.
    pub fn from_f32(value: f32, prec: u32) -> IvyResult<Self> {
        Self::from_f64(f64::from(value), prec)
    }

    /// Convert an integer, rounding it to `prec` bits.
    pub fn from_bigint(value: &BigInt, prec: u32) -> IvyResult<Self> {
        check_prec(prec)?;
        Ok(Self::round(value.clone(), 0, prec))
    }

    /// Convert an integer without any rounding.
    pub fn exact(value: &BigInt) -> Self {
        let prec = u32::try_from(value.bits().max(1)).unwrap_or(u32::MAX);
        Self::round(value.clone(), 0, prec)
    }

    fn round(mantissa: BigInt, exponent: i64, prec: u32) -> Self {
        let (mantissa, exponent) = round_parts(mantissa, exponent, prec);
        Self {
            value: Repr::Finite { mantissa, exponent },
            prec,
        }
    }

    /// The mantissa precision in bits this value was rounded to.
    #[inline]
    pub fn prec(&self) -> u32 {
        self.prec
    }

    /// The sign of the value; zero reports [`Sign::NoSign`].
    pub fn sign(&self) -> Sign {
        match &self.value {
            Repr::Finite { mantissa, .. } => mantissa.sign(),
            Repr::Infinite(sign) => *sign,
        }
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::NoSign
    }

    /// Whether the value is an infinity.
    pub fn is_infinite(&self) -> bool {
        matches!(self.value, Repr::Infinite(_))
    }

    /// Whether the value is finite and has no fractional part.
    pub fn is_integer(&self) -> bool {
        matches!(self.value, Repr::Finite { exponent, .. } if exponent >= 0)
    }

    /// The exact integer value, if [`BigFloat::is_integer`].
    pub fn to_bigint(&self) -> Option<BigInt> {
        match &self.value {
            Repr::Finite { mantissa, exponent } if *exponent >= 0 => {
                Some(mantissa << exponent.unsigned_abs())
            }
            _ => None,
        }
    }

    /// The nearest `f64`, saturating to infinity when out of range.
    pub fn to_f64(&self) -> f64 {
        match &self.value {
            Repr::Infinite(Sign::Minus) => f64::NEG_INFINITY,
            Repr::Infinite(_) => f64::INFINITY,
            Repr::Finite { mantissa, exponent } => {
                let (mantissa, exponent) = round_parts(mantissa.clone(), *exponent, F64_PREC);
                scale(mantissa.to_f64().unwrap_or(0.0), exponent)
            }
        }
    }

    /// Compare against an integer without rounding either side.
    pub fn cmp_int(&self, other: &BigInt) -> Ordering {
        self.cmp(&Self::exact(other))
    }
}

/// Round `mantissa * 2^exponent` to `prec` significant bits, ties to even, and normalise the
/// mantissa to be odd.
fn round_parts(mantissa: BigInt, mut exponent: i64, prec: u32) -> (BigInt, i64) {
    let (sign, mut magnitude) = mantissa.into_parts();
    if magnitude.is_zero() {
        return (BigInt::zero(), 0);
    }

    let bits = magnitude.bits();
    let prec_bits = u64::from(prec);
    if bits > prec_bits {
        let shift = bits - prec_bits;
        let truncated: BigUint = &magnitude >> shift;
        let remainder = &magnitude - (&truncated << shift);
        let half = BigUint::one() << (shift - 1);
        magnitude = match remainder.cmp(&half) {
            Ordering::Greater => truncated + 1u32,
            Ordering::Equal if truncated.bit(0) => truncated + 1u32,
            _ => truncated,
        };
        exponent += shift as i64;
    }

    let zeros = magnitude.trailing_zeros().unwrap_or(0);
    magnitude >>= zeros;
    exponent += zeros as i64;

    (BigInt::from_biguint(sign, magnitude), exponent)
}

fn check_prec(prec: u32) -> IvyResult<()> {
    if prec == 0 {
        ivy_bail!("float precision must be at least one bit");
    }
    Ok(())
}

/// Multiply by a power of two in steps, the mantissa has at most 53 bits so only subnormal
/// results round.
fn scale(mut value: f64, mut exponent: i64) -> f64 {
    const STEP: i32 = 1000;
    while exponent > i64::from(STEP) && value.is_finite() {
        value *= 2f64.powi(STEP);
        exponent -= i64::from(STEP);
    }
    while exponent < -i64::from(STEP) && value != 0.0 {
        value *= 2f64.powi(-STEP);
        exponent += i64::from(STEP);
    }
    match i32::try_from(exponent) {
        Ok(exponent) if value.is_finite() && value != 0.0 => value * 2f64.powi(exponent),
        _ => value,
    }
}

fn cmp_finite(m1: &BigInt, e1: i64, m2: &BigInt, e2: i64) -> Ordering {
    match m1.sign().cmp(&m2.sign()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    if e1 == e2 {
        return m1.cmp(m2);
    }
    let base = e1.min(e2);
    let lhs: BigInt = m1 << (e1 - base).unsigned_abs();
    let rhs: BigInt = m2 << (e2 - base).unsigned_abs();
    lhs.cmp(&rhs)
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (Repr::Infinite(lhs), Repr::Infinite(rhs)) => lhs.cmp(rhs),
            (Repr::Infinite(sign), _) => {
                if *sign == Sign::Minus {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (_, Repr::Infinite(sign)) => {
                if *sign == Sign::Minus {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (
                Repr::Finite {
                    mantissa: m1,
                    exponent: e1,
                },
                Repr::Finite {
                    mantissa: m2,
                    exponent: e2,
                },
            ) => cmp_finite(m1, *e1, m2, *e2),
        }
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialEq<BigInt> for BigFloat {
    fn eq(&self, other: &BigInt) -> bool {
        self.cmp_int(other) == Ordering::Equal
    }
}

impl PartialOrd<BigInt> for BigFloat {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_int(other))
    }
}

impl PartialEq<BigFloat> for BigInt {
    fn eq(&self, other: &BigFloat) -> bool {
        other.cmp_int(self) == Ordering::Equal
    }
}

impl PartialOrd<BigFloat> for BigInt {
    fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
        Some(other.cmp_int(self).reverse())
    }
}

impl Display for BigFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Repr::Infinite(Sign::Minus) => write!(f, "-Inf"),
            Repr::Infinite(_) => write!(f, "+Inf"),
            Repr::Finite { mantissa, exponent }
                if *exponent >= 0 && mantissa.bits() > u64::from(F64_PREC) =>
            {
                write!(f, "{}", mantissa << exponent.unsigned_abs())
            }
            Repr::Finite { .. } => {
                let value = self.to_f64();
                let magnitude = value.abs();
                if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
                    write!(f, "{value:e}")
                } else {
                    write!(f, "{value}")
                }
            }
        }
    }
}
