use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::MERGE;
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_APP, PREC_ATOM, Precedence, Print, PrintCfg};

use super::Exp;

/// Case analysis on unions: `merge handlers` where `handlers` is a record with one
/// handler per alternative.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Merge<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub handlers: Box<Exp<E>>,
}

impl<E> From<Merge<E>> for Exp<E> {
    fn from(val: Merge<E>) -> Self {
        Exp::Merge(val)
    }
}

impl<E: Print> Print for Merge<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        alloc
            .keyword(MERGE)
            .append(alloc.space())
            .append(self.handlers.print_prec(cfg, alloc, PREC_ATOM))
            .parens_if(prec > PREC_APP)
    }
}
