use std::rc::Rc;

use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::{ARROW, BACKSLASH, FAT_ARROW, FN};
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_OPEN, Precedence, Print, PrintCfg};

use super::Exp;

/// An anonymous function `fn name => body`
///
/// The body is reference counted so that closures can share it with the syntax tree.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Lambda<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub name: String,
    pub body: Rc<Exp<E>>,
}

impl<E> From<Lambda<E>> for Exp<E> {
    fn from(val: Lambda<E>) -> Self {
        Exp::Lambda(val)
    }
}

impl<E: Print> Print for Lambda<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Lambda { name, body, .. } = self;
        let head = if cfg.print_lambda_sugar {
            alloc.keyword(BACKSLASH).append(name.as_str()).append(alloc.space()).append(ARROW)
        } else {
            alloc
                .keyword(FN)
                .append(alloc.space())
                .append(name.as_str())
                .append(alloc.space())
                .append(FAT_ARROW)
        };
        head.append(alloc.line().append(body.print_prec(cfg, alloc, PREC_OPEN)).nest(cfg.indent))
            .group()
            .parens_if(prec > PREC_OPEN)
    }
}
