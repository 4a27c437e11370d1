use std::fmt;

use codespan::Span;
use derivative::Derivative;
use num_bigint::{BigInt, BigUint, Sign};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::{FALSE, TRUE};
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A scalar literal
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Literal {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub scalar: Scalar,
}

/// Scalar values shared by syntax trees and evaluated values.
///
/// Naturals and integers are arbitrary precision. In the serialized form they are
/// decimal strings, so that no precision is lost in formats such as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    Natural(#[serde(with = "decimal")] BigUint),
    Integer(#[serde(with = "decimal")] BigInt),
    Double(OrderedFloat<f64>),
    Text(String),
}

impl Scalar {
    /// The canonical decimal rendering of numeric scalars.
    ///
    /// Doubles use the shortest representation which reads back to the same
    /// value and always contain a decimal point or an exponent (`1.0`, `1e-7`).
    pub fn show_numeric(&self) -> Option<String> {
        match self {
            Scalar::Natural(n) => Some(n.to_string()),
            Scalar::Integer(n) => Some(n.to_string()),
            Scalar::Double(d) => Some(show_double(d.0)),
            Scalar::Bool(_) | Scalar::Text(_) => None,
        }
    }
}

pub fn show_double(d: f64) -> String {
    format!("{d:?}")
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => write!(f, "{TRUE}"),
            Scalar::Bool(false) => write!(f, "{FALSE}"),
            Scalar::Natural(n) => write!(f, "{n}"),
            Scalar::Integer(n) => match n.sign() {
                Sign::Minus => write!(f, "{n}"),
                Sign::NoSign | Sign::Plus => write!(f, "+{n}"),
            },
            Scalar::Double(d) => write!(f, "{}", show_double(d.0)),
            Scalar::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl<E> From<Literal> for Exp<E> {
    fn from(val: Literal) -> Self {
        Exp::Literal(val)
    }
}

impl Print for Scalar {
    fn print_prec<'a>(
        &'a self,
        _cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Scalar::Bool(true) => alloc.keyword(TRUE),
            Scalar::Bool(false) => alloc.keyword(FALSE),
            _ => alloc.literal(self.to_string()),
        }
    }
}

impl Print for Literal {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        self.scalar.print_prec(cfg, alloc, prec)
    }
}

mod decimal {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_double_keeps_decimal_point() {
        assert_eq!(show_double(1.0), "1.0");
        assert_eq!(show_double(0.1), "0.1");
        assert_eq!(show_double(-2.5), "-2.5");
    }

    #[test]
    fn display_integer_with_sign() {
        assert_eq!(Scalar::Integer(BigInt::from(5)).to_string(), "+5");
        assert_eq!(Scalar::Integer(BigInt::from(-5)).to_string(), "-5");
        assert_eq!(Scalar::Integer(BigInt::from(0)).to_string(), "+0");
    }

    #[test]
    fn show_numeric_has_no_sign() {
        assert_eq!(Scalar::Integer(BigInt::from(5)).show_numeric(), Some("5".to_owned()));
        assert_eq!(Scalar::Text("5".to_owned()).show_numeric(), None);
    }

    #[test]
    fn display_text_escapes() {
        assert_eq!(Scalar::Text("a\"b".to_owned()).to_string(), r#""a\"b""#);
    }
}
