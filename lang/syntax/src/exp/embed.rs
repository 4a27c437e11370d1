use codespan::Span;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// An already evaluated foreign value spliced into a syntax tree
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Embed<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub payload: E,
}

impl<E> From<Embed<E>> for Exp<E> {
    fn from(val: Embed<E>) -> Self {
        Exp::Embed(val)
    }
}

impl<E: Print> Print for Embed<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        self.payload.print_prec(cfg, alloc, prec)
    }
}
