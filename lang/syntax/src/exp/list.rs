use codespan::Span;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use fern_lang_printer::util::sequence;
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A list literal `[e_1, ..., e_n]`
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct List<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub elements: Vec<Exp<E>>,
}

impl<E> From<List<E>> for Exp<E> {
    fn from(val: List<E>) -> Self {
        Exp::List(val)
    }
}

impl<E: Print> Print for List<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let List { elements, .. } = self;
        sequence(alloc, cfg, "[", "]", elements.iter().map(|e| e.print(cfg, alloc)))
    }
}
