use codespan::Span;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use fern_lang_printer::tokens::DOT;
use fern_lang_printer::{Alloc, Builder, PREC_ATOM, Precedence, Print, PrintCfg};

use super::Exp;

/// A record projection `record.key`
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Field<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub record: Box<Exp<E>>,
    pub key: String,
}

impl<E> From<Field<E>> for Exp<E> {
    fn from(val: Field<E>) -> Self {
        Exp::Field(val)
    }
}

impl<E: Print> Print for Field<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let Field { record, key, .. } = self;
        record.print_prec(cfg, alloc, PREC_ATOM).append(DOT).append(key.as_str())
    }
}
