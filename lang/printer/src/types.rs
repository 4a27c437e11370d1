use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anno {
    Keyword,
    Builtin,
    Literal,
    Tag,
}

pub type Alloc<'a> = pretty::Arena<'a, Anno>;
pub type Builder<'a> = pretty::DocBuilder<'a, Alloc<'a>, Anno>;

/// Operator precedences
pub type Precedence = u32;

/// The precedence of an unparenthesised lambda, let or if.
pub const PREC_OPEN: Precedence = 0;
/// The precedence of `||`.
pub const PREC_OR: Precedence = 1;
/// The precedence of `&&`.
pub const PREC_AND: Precedence = 2;
/// The precedence of `+` and `++`.
pub const PREC_PLUS: Precedence = 3;
/// The precedence of `*`.
pub const PREC_TIMES: Precedence = 4;
/// The precedence of function application.
pub const PREC_APP: Precedence = 5;
/// The precedence of atoms and field projections.
pub const PREC_ATOM: Precedence = 6;

pub trait Print {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        self.print_prec(cfg, alloc, PREC_OPEN)
    }

    /// Print with precedence information about the enclosing context.
    ///
    /// * `prec` The precedence of the surrounding context.
    fn print_prec<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>, prec: Precedence)
    -> Builder<'a>;
}

impl<T: Print + ?Sized> Print for &T {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        T::print_prec(self, cfg, alloc, prec)
    }
}

impl<T: Print + ?Sized> Print for Box<T> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        T::print_prec(self, cfg, alloc, prec)
    }
}

impl<T: Print + ?Sized> Print for Rc<T> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        T::print_prec(self, cfg, alloc, prec)
    }
}

pub struct PrintCfg {
    /// The width of the output terminal/device. Width is used for
    /// the insertion of linebreaks.
    pub width: usize,
    /// Whether to print the De-Bruijn representation of variables
    pub de_bruijn: bool,
    /// How many spaces of indentation are used
    pub indent: isize,
    /// Whether to print the syntactic sugar "\x -> body" instead of "fn x => body".
    pub print_lambda_sugar: bool,
}

impl Default for PrintCfg {
    fn default() -> Self {
        Self {
            width: crate::DEFAULT_WIDTH,
            de_bruijn: false,
            indent: 4,
            print_lambda_sugar: false,
        }
    }
}
