use std::fmt;
use std::str::FromStr;

use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fern_lang_printer::tokens::{AND, APPEND, OR, PLUS, TIMES};
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{
    Alloc, Builder, PREC_AND, PREC_OR, PREC_PLUS, PREC_TIMES, Precedence, Print, PrintCfg,
};

use super::Exp;

/// A binary operator application `lhs op rhs`
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct BinOp<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub lhs: Box<Exp<E>>,
    pub op: Operator,
    pub rhs: Box<Exp<E>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "*")]
    Times,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "++")]
    Append,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => AND,
            Operator::Or => OR,
            Operator::Times => TIMES,
            Operator::Plus => PLUS,
            Operator::Append => APPEND,
        }
    }

    /// All operators are left associative.
    pub fn precedence(&self) -> Precedence {
        match self {
            Operator::Or => PREC_OR,
            Operator::And => PREC_AND,
            Operator::Plus | Operator::Append => PREC_PLUS,
            Operator::Times => PREC_TIMES,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator {0}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Operator::And, Operator::Or, Operator::Times, Operator::Plus, Operator::Append]
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| UnknownOperator(s.to_owned()))
    }
}

impl<E> From<BinOp<E>> for Exp<E> {
    fn from(val: BinOp<E>) -> Self {
        Exp::BinOp(val)
    }
}

/// Print an infix operator application, shared with the printing of neutral operator values.
pub fn print_bin_op<'a, T: Print>(
    cfg: &PrintCfg,
    alloc: &'a Alloc<'a>,
    prec: Precedence,
    lhs: &'a T,
    op: Operator,
    rhs: &'a T,
) -> Builder<'a> {
    let op_prec = op.precedence();
    lhs.print_prec(cfg, alloc, op_prec)
        .append(alloc.space())
        .append(op.symbol())
        .append(alloc.line())
        .append(rhs.print_prec(cfg, alloc, op_prec + 1))
        .group()
        .parens_if(prec > op_prec)
}

impl<E: Print> Print for BinOp<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let BinOp { lhs, op, rhs, .. } = self;
        print_bin_op(cfg, alloc, prec, lhs, *op, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_operator() {
        assert_eq!("++".parse::<Operator>(), Ok(Operator::Append));
        assert_eq!("-".parse::<Operator>(), Err(UnknownOperator("-".to_owned())));
    }
}
