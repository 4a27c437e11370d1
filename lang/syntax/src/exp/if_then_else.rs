use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::{ELSE, IF, THEN};
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_OPEN, Precedence, Print, PrintCfg};

use super::Exp;

/// A conditional `if cond then then_branch else else_branch`
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct IfThenElse<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub cond: Box<Exp<E>>,
    pub then_branch: Box<Exp<E>>,
    pub else_branch: Box<Exp<E>>,
}

impl<E> From<IfThenElse<E>> for Exp<E> {
    fn from(val: IfThenElse<E>) -> Self {
        Exp::IfThenElse(val)
    }
}

impl<E: Print> Print for IfThenElse<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let IfThenElse { cond, then_branch, else_branch, .. } = self;
        alloc
            .keyword(IF)
            .append(alloc.space())
            .append(cond.print(cfg, alloc))
            .append(alloc.line())
            .append(alloc.keyword(THEN))
            .append(alloc.space())
            .append(then_branch.print(cfg, alloc))
            .append(alloc.line())
            .append(alloc.keyword(ELSE))
            .append(alloc.space())
            .append(else_branch.print_prec(cfg, alloc, PREC_OPEN))
            .group()
            .parens_if(prec > PREC_OPEN)
    }
}
