use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_APP, PREC_ATOM, Precedence, Print, PrintCfg};

use super::Exp;

/// Function application `fun arg`
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct App<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub fun: Box<Exp<E>>,
    pub arg: Box<Exp<E>>,
}

impl<E> From<App<E>> for Exp<E> {
    fn from(val: App<E>) -> Self {
        Exp::App(val)
    }
}

impl<E: Print> Print for App<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let App { fun, arg, .. } = self;
        fun.print_prec(cfg, alloc, PREC_APP)
            .append(alloc.line())
            .append(arg.print_prec(cfg, alloc, PREC_ATOM))
            .nest(cfg.indent)
            .group()
            .parens_if(prec > PREC_APP)
    }
}
