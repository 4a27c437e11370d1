use codespan::Span;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A union alternative tag such as `Left`. Applying it to a payload builds a tagged value.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Alternative {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub name: String,
}

impl<E> From<Alternative> for Exp<E> {
    fn from(val: Alternative) -> Self {
        Exp::Alternative(val)
    }
}

impl Print for Alternative {
    fn print_prec<'a>(
        &'a self,
        _cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        alloc.tag(&self.name)
    }
}
