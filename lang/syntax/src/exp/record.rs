use codespan::Span;
use derivative::Derivative;
use pretty::DocAllocator;
use serde::{Deserialize, Serialize};

use fern_lang_printer::tokens::COLON;
use fern_lang_printer::util::sequence;
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use super::Exp;

/// A record literal `{ k_1: e_1, ..., k_n: e_n }`.
///
/// Keys are unique and their order is preserved by evaluation.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Record<E> {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    #[serde(skip)]
    pub span: Option<Span>,
    pub fields: Vec<(String, Exp<E>)>,
}

impl<E> From<Record<E>> for Exp<E> {
    fn from(val: Record<E>) -> Self {
        Exp::Record(val)
    }
}

/// Print the fields of a record, shared with the printing of record values.
pub fn print_fields<'a, I, T>(cfg: &PrintCfg, alloc: &'a Alloc<'a>, fields: I) -> Builder<'a>
where
    I: IntoIterator<Item = &'a (String, T)>,
    T: Print + 'a,
{
    let fields = fields.into_iter().map(|(key, value)| {
        alloc
            .text(key.as_str())
            .append(COLON)
            .append(alloc.space())
            .append(value.print(cfg, alloc))
    });
    sequence(alloc, cfg, "{", "}", fields)
}

impl<E: Print> Print for Record<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        print_fields(cfg, alloc, &self.fields)
    }
}
