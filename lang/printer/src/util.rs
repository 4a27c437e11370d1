use pretty::DocAllocator;

use super::types::*;

pub trait ParensIfExt<'a, D, A: 'a>
where
    D: ?Sized + DocAllocator<'a, A>,
{
    /// Wrap the document in parentheses if the surrounding context binds tighter.
    fn parens_if(self, cond: bool) -> pretty::DocBuilder<'a, D, A>;
}

impl<'a, D, A> ParensIfExt<'a, D, A> for pretty::DocBuilder<'a, D, A>
where
    D: ?Sized + DocAllocator<'a, A>,
{
    fn parens_if(self, cond: bool) -> pretty::DocBuilder<'a, D, A> {
        if cond { self.parens() } else { self }
    }
}

/// Print a comma separated sequence enclosed by `open` and `close`.
pub fn sequence<'a, I>(
    alloc: &'a Alloc<'a>,
    cfg: &PrintCfg,
    open: &'a str,
    close: &'a str,
    items: I,
) -> Builder<'a>
where
    I: IntoIterator<Item = Builder<'a>>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return alloc.text(open).append(alloc.text(close));
    }
    let sep = alloc.text(crate::tokens::COMMA).append(alloc.line());
    alloc
        .text(open)
        .append(alloc.line_().append(alloc.intersperse(items, sep)).nest(cfg.indent))
        .append(alloc.line_())
        .append(alloc.text(close))
        .group()
}
