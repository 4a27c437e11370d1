use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::tokens::COLON;
use fern_lang_printer::util::ParensIfExt;
use fern_lang_printer::{Alloc, Builder, PREC_OPEN, PREC_OR, Precedence, Print, PrintCfg};

use super::Exp;

/// A type annotation `exp : typ`.
///
/// Types are owned by the type checker; normalization only carries their source text.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Anno<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub exp: Box<Exp<E>>,
    pub typ: Type,
}

/// The textual form of a type as written by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(pub String);

impl<E> From<Anno<E>> for Exp<E> {
    fn from(val: Anno<E>) -> Self {
        Exp::Anno(val)
    }
}

impl Print for Type {
    fn print_prec<'a>(
        &'a self,
        _cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        alloc.text(self.0.as_str())
    }
}

impl<E: Print> Print for Anno<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Anno { exp, typ, .. } = self;
        exp.print_prec(cfg, alloc, PREC_OR)
            .append(alloc.space())
            .append(COLON)
            .append(alloc.space())
            .append(typ.print(cfg, alloc))
            .parens_if(prec > PREC_OPEN)
    }
}
