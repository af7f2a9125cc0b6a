//! The evaluation context the vector algorithms call back into.

use std::fmt::{Display, Formatter};

use ivy_error::{IvyResult, ivy_bail};

use crate::Value;

/// Settings owned by the execution context and copied into every view it binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    origin: usize,
    float_prec: u32,
}

impl Config {
    pub const DEFAULT_ORIGIN: usize = 1;
    pub const DEFAULT_FLOAT_PREC: u32 = 256;

    pub fn try_new(origin: usize, float_prec: u32) -> IvyResult<Self> {
        Self::default()
            .with_origin(origin)?
            .with_float_prec(float_prec)
    }

    /// The index origin: the index of the first element, either 0 or 1.
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// The mantissa precision, in bits, floats are decoded at.
    #[inline]
    pub fn float_prec(&self) -> u32 {
        self.float_prec
    }

    pub fn with_origin(mut self, origin: usize) -> IvyResult<Self> {
        if origin > 1 {
            ivy_bail!("origin must be 0 or 1, got {}", origin);
        }
        self.origin = origin;
        Ok(self)
    }

    pub fn with_float_prec(mut self, float_prec: u32) -> IvyResult<Self> {
        if float_prec == 0 {
            ivy_bail!("float precision must be at least one bit");
        }
        self.float_prec = float_prec;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: Self::DEFAULT_ORIGIN,
            float_prec: Self::DEFAULT_FLOAT_PREC,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    origin: usize,
    float_prec: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ivy_error::IvyError;

    fn try_from(raw: RawConfig) -> IvyResult<Self> {
        Self::try_new(raw.origin, raw.float_prec)
    }
}

/// The comparison operators the ordering algorithms delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Lt,
    Ge,
    Eq,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lt => write!(f, "<"),
            Self::Ge => write!(f, ">="),
            Self::Eq => write!(f, "=="),
        }
    }
}

/// The evaluator, as seen from the vector layer.
///
/// `eval_binary` dispatches a language operator and may itself re-enter any of the algorithms in
/// [`crate::compute`], so implementations must not hold exclusive borrows across the call.
pub trait Context {
    fn config(&self) -> &Config;

    fn eval_binary(&self, left: &Value, op: BinaryOp, right: &Value) -> IvyResult<Value>;
}

/// A boolean comparison between two values, the only capability the ordering algorithms need.
pub trait Comparator {
    fn compare(&self, left: &Value, op: BinaryOp, right: &Value) -> IvyResult<bool>;
}

impl<C: Context + ?Sized> Comparator for C {
    fn compare(&self, left: &Value, op: BinaryOp, right: &Value) -> IvyResult<bool> {
        let result = self.eval_binary(left, op, right)?;
        match result.as_int().and_then(|i| u8::try_from(i).ok()) {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => ivy_bail!(
                "comparison {} {} {} returned {}, expected 0 or 1",
                left.kind(),
                op,
                right.kind(),
                result.kind()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.origin(), 1);
        assert_eq!(config.float_prec(), 256);
    }

    #[rstest]
    #[case(0, 53, true)]
    #[case(1, 1, true)]
    #[case(2, 53, false)]
    #[case(1, 0, false)]
    fn validates(#[case] origin: usize, #[case] float_prec: u32, #[case] valid: bool) {
        assert_eq!(Config::try_new(origin, float_prec).is_ok(), valid);
    }

    struct Constant(Value, Config);

    impl Context for Constant {
        fn config(&self) -> &Config {
            &self.1
        }

        fn eval_binary(&self, _: &Value, _: BinaryOp, _: &Value) -> IvyResult<Value> {
            Ok(self.0.clone())
        }
    }

    #[rstest]
    #[case(Value::from(1i64), Some(true))]
    #[case(Value::from(0i64), Some(false))]
    #[case(Value::from(2i64), None)]
    #[case(Value::from('x'), None)]
    fn comparisons_must_be_boolean(#[case] result: Value, #[case] expected: Option<bool>) {
        let ctx = Constant(result, Config::default());
        let one = Value::from(1i64);
        assert_eq!(ctx.compare(&one, BinaryOp::Lt, &one).ok(), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config::try_new(0, 64).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"origin":0,"float_prec":64}"#);
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
        assert!(serde_json::from_str::<Config>(r#"{"origin":2,"float_prec":64}"#).is_err());
    }
}
