use pretty::DocAllocator;

use super::types::*;

pub trait ThemeExt<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a>;
    fn builtin(&'a self, text: &'a str) -> Builder<'a>;
    fn literal(&'a self, text: String) -> Builder<'a>;
    fn tag(&'a self, text: &'a str) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Keyword)
    }

    fn builtin(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Builtin)
    }

    fn literal(&'a self, text: String) -> Builder<'a> {
        self.text(text).annotate(Anno::Literal)
    }

    fn tag(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Tag)
    }
}
