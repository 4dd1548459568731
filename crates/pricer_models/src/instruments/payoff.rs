//! Option type definitions.
//!
//! European vanilla options come in exactly two variants. The tag is a
//! two-case enum dispatched once per pricing call; string tags are parsed
//! strictly so that anything other than `call`/`put` is rejected.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::ContractError;

/// Variant of a European vanilla option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Exercise value against `strike` at underlying level `spot`.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let value = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        value.max(T::zero())
    }

    /// Returns the lowercase tag (`"call"` or `"put"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(ContractError::UnknownOptionType { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "c".parse::<OptionType>().unwrap_err();
        assert_eq!(
            err,
            ContractError::UnknownOptionType {
                tag: "c".to_string()
            }
        );
        assert!("".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_display_round_trip() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
    }
}
