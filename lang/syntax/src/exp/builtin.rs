use std::fmt;
use std::str::FromStr;

use codespan::Span;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A reference to a builtin function
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct BuiltinRef {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub builtin: Builtin,
}

/// The closed catalog of builtin functions.
///
/// Adding a builtin requires a matching reduction rule in the normalizer;
/// until then applications of it stay stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Builtin {
    /// `List/fold : List a -> (a -> b -> b) -> b -> b`
    #[serde(rename = "List/fold")]
    ListFold,
    /// `List/length : List a -> Natural`
    #[serde(rename = "List/length")]
    ListLength,
    /// `List/map : (a -> b) -> List a -> List b`
    #[serde(rename = "List/map")]
    ListMap,
    /// `Natural/fold : Natural -> (a -> a) -> a -> a`
    #[serde(rename = "Natural/fold")]
    NaturalFold,
    #[serde(rename = "Integer/even")]
    IntegerEven,
    #[serde(rename = "Integer/odd")]
    IntegerOdd,
    /// Renders a Natural, Integer or Double as Text
    #[serde(rename = "Double/show")]
    DoubleShow,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::ListFold,
        Builtin::ListLength,
        Builtin::ListMap,
        Builtin::NaturalFold,
        Builtin::IntegerEven,
        Builtin::IntegerOdd,
        Builtin::DoubleShow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::ListFold => "List/fold",
            Builtin::ListLength => "List/length",
            Builtin::ListMap => "List/map",
            Builtin::NaturalFold => "Natural/fold",
            Builtin::IntegerEven => "Integer/even",
            Builtin::IntegerOdd => "Integer/odd",
            Builtin::DoubleShow => "Double/show",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown builtin {0}")]
pub struct UnknownBuiltin(pub String);

impl FromStr for Builtin {
    type Err = UnknownBuiltin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|builtin| builtin.name() == s)
            .ok_or_else(|| UnknownBuiltin(s.to_owned()))
    }
}

impl<E> From<BuiltinRef> for Exp<E> {
    fn from(val: BuiltinRef) -> Self {
        Exp::Builtin(val)
    }
}

impl Print for Builtin {
    fn print_prec<'a>(
        &'a self,
        _cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        alloc.builtin(self.name())
    }
}

impl Print for BuiltinRef {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        self.builtin.print_prec(cfg, alloc, prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(builtin.name().parse::<Builtin>(), Ok(builtin));
        }
    }

    #[test]
    fn unknown_builtin() {
        assert_eq!("Text/length".parse::<Builtin>(), Err(UnknownBuiltin("Text/length".to_owned())));
    }
}
