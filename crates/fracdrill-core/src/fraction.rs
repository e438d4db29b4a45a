//! Mixed-number arithmetic.
//!
//! Answers are compared as strings, so `simplify` defines the one canonical
//! spelling of every value: `"0"`, `"3"`, `"-3"`, `"11/12"`, `"-11/12"`,
//! `"1 11/12"` or `"-1 11/12"`. The sign is written once, in front.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FractionError;

/// A non-negative mixed number such as `1 1/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMixedNumber")]
pub struct MixedNumber {
    whole: u32,
    numerator: u32,
    denominator: u32,
}

impl MixedNumber {
    /// Build a mixed number. The parts are kept as given, unreduced.
    pub fn new(whole: u32, numerator: u32, denominator: u32) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self {
            whole,
            numerator,
            denominator,
        })
    }

    /// For built-in tables only; `denominator` must be non-zero.
    pub(crate) const fn from_parts(whole: u32, numerator: u32, denominator: u32) -> Self {
        Self {
            whole,
            numerator,
            denominator,
        }
    }

    pub fn whole(&self) -> u32 {
        self.whole
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// The numerator of the equivalent improper fraction over `denominator`.
    pub fn improper_numerator(&self) -> i64 {
        i64::from(self.numerator) + i64::from(self.whole) * i64::from(self.denominator)
    }
}

/// Unchecked wire form; deserialization goes through `MixedNumber::new`.
#[derive(Deserialize)]
struct RawMixedNumber {
    whole: u32,
    numerator: u32,
    denominator: u32,
}

impl TryFrom<RawMixedNumber> for MixedNumber {
    type Error = FractionError;

    fn try_from(raw: RawMixedNumber) -> Result<Self, Self::Error> {
        Self::new(raw.whole, raw.numerator, raw.denominator)
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.whole, self.numerator) {
            (0, 0) => write!(f, "0"),
            (w, 0) => write!(f, "{w}"),
            (0, n) => write!(f, "{n}/{}", self.denominator),
            (w, n) => write!(f, "{w} {n}/{}", self.denominator),
        }
    }
}

impl FromStr for MixedNumber {
    type Err = FractionError;

    /// Accepts `"3"`, `"2/3"` and `"1 1/4"`, with any spacing around `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason| FractionError::Parse {
            input: s.to_string(),
            reason,
        };
        let number = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| parse_err("expected a non-negative integer"))
        };

        let cleaned = crate::normalize::clean_input(s);
        if cleaned.is_empty() {
            return Err(parse_err("empty input"));
        }

        let Some((head, denominator)) = cleaned.split_once('/') else {
            return Self::new(number(&cleaned)?, 0, 1);
        };
        if denominator.contains('/') {
            return Err(parse_err("expected at most one '/'"));
        }
        let denominator = number(denominator)?;

        let (whole, numerator) = match head.split_once(' ') {
            Some((whole, numerator)) => (number(whole)?, number(numerator)?),
            None => (0, number(head)?),
        };

        Self::new(whole, numerator, denominator).map_err(|_| parse_err("zero denominator"))
    }
}

/// Addition or subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            _ => Err(FractionError::Parse {
                input: s.to_string(),
                reason: "expected '+' or '-'",
            }),
        }
    }
}

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, or `None` if it does not fit in a `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Render the improper fraction `numerator / denominator` in canonical form.
pub fn simplify(numerator: i64, denominator: i64) -> Result<String, FractionError> {
    if denominator <= 0 {
        return Err(FractionError::NonPositiveDenominator(denominator));
    }
    if numerator == 0 {
        return Ok("0".to_string());
    }

    let sign = if numerator < 0 { "-" } else { "" };
    let magnitude = numerator.unsigned_abs();
    let denominator = denominator.unsigned_abs();

    let divisor = gcd(magnitude, denominator);
    let (n, d) = (magnitude / divisor, denominator / divisor);

    if d == 1 {
        return Ok(format!("{sign}{n}"));
    }

    let whole = n / d;
    let remainder = n % d;
    if whole > 0 {
        Ok(format!("{sign}{whole} {remainder}/{d}"))
    } else {
        Ok(format!("{sign}{remainder}/{d}"))
    }
}

/// Add or subtract two mixed numbers and return the canonical answer string.
pub fn compute(
    left: &MixedNumber,
    operator: Operator,
    right: &MixedNumber,
) -> Result<String, FractionError> {
    if left.denominator == 0 || right.denominator == 0 {
        return Err(FractionError::ZeroDenominator);
    }
    let left_den = u64::from(left.denominator);
    let right_den = u64::from(right.denominator);
    let common = lcm(left_den, right_den).ok_or(FractionError::Overflow("common denominator"))?;

    // Each denominator divides `common` exactly.
    let common = i64::try_from(common).map_err(|_| FractionError::Overflow("common denominator"))?;
    let left_scale = common / i64::from(left.denominator);
    let right_scale = common / i64::from(right.denominator);

    let scaled_left = left
        .improper_numerator()
        .checked_mul(left_scale)
        .ok_or(FractionError::Overflow("left numerator"))?;
    let scaled_right = right
        .improper_numerator()
        .checked_mul(right_scale)
        .ok_or(FractionError::Overflow("right numerator"))?;

    let result = match operator {
        Operator::Add => scaled_left.checked_add(scaled_right),
        Operator::Subtract => scaled_left.checked_sub(scaled_right),
    }
    .ok_or(FractionError::Overflow("result numerator"))?;

    simplify(result, common)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed(w: u32, n: u32, d: u32) -> MixedNumber {
        MixedNumber::new(w, n, d).unwrap()
    }

    #[test]
    fn simplify_zero_is_zero_for_any_denominator() {
        for d in [1, 2, 7, 12, 100] {
            assert_eq!(simplify(0, d).unwrap(), "0");
        }
    }

    #[test]
    fn simplify_exact_division_is_whole() {
        assert_eq!(simplify(12, 6).unwrap(), "2");
        assert_eq!(simplify(-12, 6).unwrap(), "-2");
        assert_eq!(simplify(5, 1).unwrap(), "5");
    }

    #[test]
    fn simplify_proper_fraction() {
        assert_eq!(simplify(11, 12).unwrap(), "11/12");
        assert_eq!(simplify(-11, 12).unwrap(), "-11/12");
        assert_eq!(simplify(6, 8).unwrap(), "3/4");
    }

    #[test]
    fn simplify_mixed_number_signs_once() {
        assert_eq!(simplify(23, 12).unwrap(), "1 11/12");
        assert_eq!(simplify(-23, 12).unwrap(), "-1 11/12");
        assert_eq!(simplify(-46, 24).unwrap(), "-1 11/12");
    }

    #[test]
    fn simplify_rejects_non_positive_denominator() {
        assert_eq!(
            simplify(1, 0),
            Err(FractionError::NonPositiveDenominator(0))
        );
        assert_eq!(
            simplify(1, -4),
            Err(FractionError::NonPositiveDenominator(-4))
        );
    }

    #[test]
    fn simplify_handles_extreme_numerator() {
        assert_eq!(simplify(i64::MIN, 1).unwrap(), i64::MIN.to_string());
    }

    #[test]
    fn compute_adds_mixed_numbers() {
        let result = compute(&mixed(1, 1, 4), Operator::Add, &mixed(0, 2, 3)).unwrap();
        assert_eq!(result, "1 11/12");
    }

    #[test]
    fn compute_sums_to_whole() {
        let result = compute(&mixed(0, 5, 6), Operator::Add, &mixed(0, 7, 6)).unwrap();
        assert_eq!(result, "2");
    }

    #[test]
    fn compute_subtracts_mixed_numbers() {
        let result = compute(&mixed(4, 1, 5), Operator::Subtract, &mixed(3, 1, 2)).unwrap();
        assert_eq!(result, "7/10");
    }

    #[test]
    fn compute_negative_difference() {
        let result = compute(&mixed(0, 1, 2), Operator::Subtract, &mixed(1, 1, 4)).unwrap();
        assert_eq!(result, "-3/4");
    }

    #[test]
    fn compute_reports_overflow() {
        let big = mixed(u32::MAX, u32::MAX - 1, u32::MAX);
        let other = mixed(u32::MAX, 1, u32::MAX - 1);
        assert!(matches!(
            compute(&big, Operator::Add, &other),
            Err(FractionError::Overflow(_))
        ));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(MixedNumber::new(1, 1, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn display_shapes() {
        assert_eq!(mixed(1, 1, 4).to_string(), "1 1/4");
        assert_eq!(mixed(0, 2, 3).to_string(), "2/3");
        assert_eq!(mixed(3, 0, 5).to_string(), "3");
        assert_eq!(mixed(0, 0, 5).to_string(), "0");
    }

    #[test]
    fn parse_accepts_all_shapes() {
        assert_eq!("1 1/4".parse::<MixedNumber>().unwrap(), mixed(1, 1, 4));
        assert_eq!(" 2 / 3 ".parse::<MixedNumber>().unwrap(), mixed(0, 2, 3));
        assert_eq!("3".parse::<MixedNumber>().unwrap(), mixed(3, 0, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "1/0", "a/b", "1/2/3", "-1/2", "1 2 3/4"] {
            assert!(
                input.parse::<MixedNumber>().is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn operator_round_trips_symbol() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!(" - ".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!("*".parse::<Operator>().is_err());
        assert_eq!(Operator::Subtract.to_string(), "-");
    }

    #[test]
    fn deserialize_rejects_zero_denominator() {
        let err = serde_json::from_str::<MixedNumber>(
            r#"{"whole":0,"numerator":1,"denominator":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("denominator must be non-zero"));

        let ok: MixedNumber =
            serde_json::from_str(r#"{"whole":1,"numerator":1,"denominator":4}"#).unwrap();
        assert_eq!(ok, mixed(1, 1, 4));
    }

    #[test]
    fn compute_with_zero_denominator_is_an_error() {
        let broken = MixedNumber::from_parts(0, 1, 0);
        assert_eq!(
            compute(&broken, Operator::Add, &mixed(0, 2, 3)),
            Err(FractionError::ZeroDenominator)
        );
        assert_eq!(
            compute(&mixed(0, 2, 3), Operator::Subtract, &broken),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn lcm_of_coprime_and_shared_factors() {
        assert_eq!(lcm(4, 3), Some(12));
        assert_eq!(lcm(6, 6), Some(6));
        assert_eq!(lcm(5, 2), Some(10));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }
}
