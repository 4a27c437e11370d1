use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::tokens::AT;
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A variable occurrence. The index counts how many enclosing binders with the
/// same name have to be skipped to reach the binder this occurrence refers to,
/// so `x@0` is the innermost `x` in scope.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Variable {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub name: String,
    #[serde(default)]
    pub idx: usize,
}

impl<E> From<Variable> for Exp<E> {
    fn from(val: Variable) -> Self {
        Exp::Variable(val)
    }
}

impl Print for Variable {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let Variable { name, idx, .. } = self;
        if cfg.de_bruijn || *idx > 0 {
            alloc.text(name.as_str()).append(AT).append(idx.to_string())
        } else {
            alloc.text(name.as_str())
        }
    }
}
