use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::{COLON, EQUALS, IN, LET};
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_OPEN, Precedence, Print, PrintCfg};

use super::{Exp, Type};

/// A block of sequential, non-recursive bindings
///
/// ```text
/// let x = e_1
/// let y = e_2
/// in body
/// ```
///
/// Every assignment may refer to the bindings before it, the body may refer to all of them.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct LocalLet<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub bindings: Vec<Binding<E>>,
    pub body: Box<Exp<E>>,
}

#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Binding<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub name: String,
    #[serde(default)]
    pub annotation: Option<Type>,
    pub assignment: Box<Exp<E>>,
}

impl<E> From<LocalLet<E>> for Exp<E> {
    fn from(val: LocalLet<E>) -> Self {
        Exp::LocalLet(val)
    }
}

impl<E: Print> Print for Binding<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let Binding { name, annotation, assignment, .. } = self;
        let annotation = match annotation {
            Some(typ) => {
                alloc.space().append(COLON).append(alloc.space()).append(typ.print(cfg, alloc))
            }
            None => alloc.nil(),
        };
        alloc
            .keyword(LET)
            .append(alloc.space())
            .append(name.as_str())
            .append(annotation)
            .append(alloc.space())
            .append(EQUALS)
            .append(alloc.line().append(assignment.print(cfg, alloc)).nest(cfg.indent))
            .group()
    }
}

impl<E: Print> Print for LocalLet<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let LocalLet { bindings, body, .. } = self;
        alloc
            .intersperse(bindings.iter().map(|b| b.print(cfg, alloc)), alloc.hardline())
            .append(alloc.hardline())
            .append(alloc.keyword(IN))
            .append(alloc.space())
            .append(body.print_prec(cfg, alloc, PREC_OPEN))
            .parens_if(prec > PREC_OPEN)
    }
}
