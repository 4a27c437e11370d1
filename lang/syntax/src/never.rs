use serde::{Deserialize, Serialize};

use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

/// The payload of syntax trees which do not contain embedded values.
///
/// This type is uninhabited, so an `Exp<Never>` is guaranteed to be free of `Embed` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Never {}

impl Print for Never {
    fn print_prec<'a>(
        &'a self,
        _cfg: &PrintCfg,
        _alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        match *self {}
    }
}
