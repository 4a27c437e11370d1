use std::rc::Rc;

use pretty::DocAllocator;

use fern_lang_printer::theme::ThemeExt;
use fern_lang_printer::tokens::{AT, DOT, ELSE, FAT_ARROW, FN, IF, MERGE, THEN};
use fern_lang_printer::util::{ParensIfExt, sequence};
use fern_lang_printer::{
    Alloc, Builder, PREC_APP, PREC_ATOM, PREC_OPEN, Precedence, Print, PrintCfg,
};
use fern_lang_syntax::{Builtin, Exp, Operator, Scalar, print_bin_op, print_fields};

use crate::env::Env;
use crate::read_back::ReadBack;

/// Values are shared between environments, closures and other values
pub type Value = Rc<Val>;

/// Syntax as it is evaluated: `Embed` nodes carry values
pub type Syntax = Exp<Value>;

/// The result of evaluation
///
/// Besides the canonical forms (closures, lists, records, tags and scalars), values
/// contain neutral forms: applications, projections, merges, conditionals and operator
/// applications whose reduction is blocked by a free variable or an unmatched shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Variable(Variable),
    Lambda(Closure),
    App(App),
    List(List),
    Record(Record),
    Field(Field),
    Alternative(Alternative),
    Merge(Merge),
    IfThenElse(IfThenElse),
    Scalar(Scalar),
    BinOp(BinOp),
    Builtin(Builtin),
}

/// A variable that could not be resolved during evaluation.
///
/// A negative index `-k - 1` marks a variable that is free in the evaluated term, with `k`
/// bindings of the same name missing. Non-negative indices are produced by
/// [crate::read_back::fresh] and count the binders with the same name in scope at the
/// time of readback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub idx: isize,
}

/// A function which has not been applied yet
#[derive(Debug, Clone)]
pub struct Closure {
    pub name: String,
    pub env: Env,
    pub body: Rc<Syntax>,
}

/// Two closures are equal when they read back to the same lambda.
///
/// The captured environments are not compared: `fn x => y` under `y = 1` equals `fn x => 1`.
/// Comparing closures whose bodies do not normalize does not terminate.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.read_back_closed() == other.read_back_closed()
    }
}

impl Eq for Closure {}

/// A neutral application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub fun: Value,
    pub arg: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub elements: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<(String, Value)>,
}

/// A neutral projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub record: Value,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub name: String,
}

/// A merge waiting for a tagged value to dispatch on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub handlers: Value,
}

/// A conditional whose condition is neutral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfThenElse {
    pub cond: Value,
    pub then_branch: Value,
    pub else_branch: Value,
}

/// A neutral operator application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOp {
    pub lhs: Value,
    pub op: Operator,
    pub rhs: Value,
}

impl Val {
    pub fn bool(b: bool) -> Value {
        Rc::new(Val::Scalar(Scalar::Bool(b)))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Val::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Val::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl Record {
    /// The value bound to `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

macro_rules! impl_from_for_val {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Val {
                fn from(val: $ty) -> Self {
                    Val::$variant(val)
                }
            }
        )*
    };
}

impl_from_for_val!(
    Variable(Variable),
    Lambda(Closure),
    App(App),
    List(List),
    Record(Record),
    Field(Field),
    Alternative(Alternative),
    Merge(Merge),
    IfThenElse(IfThenElse),
    Scalar(Scalar),
    BinOp(BinOp),
    Builtin(Builtin),
);

impl Print for Val {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Val::Variable(v) => v.print_prec(cfg, alloc, prec),
            Val::Lambda(v) => v.print_prec(cfg, alloc, prec),
            Val::App(v) => v.print_prec(cfg, alloc, prec),
            Val::List(v) => v.print_prec(cfg, alloc, prec),
            Val::Record(v) => v.print_prec(cfg, alloc, prec),
            Val::Field(v) => v.print_prec(cfg, alloc, prec),
            Val::Alternative(v) => v.print_prec(cfg, alloc, prec),
            Val::Merge(v) => v.print_prec(cfg, alloc, prec),
            Val::IfThenElse(v) => v.print_prec(cfg, alloc, prec),
            Val::Scalar(v) => v.print_prec(cfg, alloc, prec),
            Val::BinOp(v) => v.print_prec(cfg, alloc, prec),
            Val::Builtin(v) => v.print_prec(cfg, alloc, prec),
        }
    }
}

impl Print for Variable {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let Variable { name, idx } = self;
        if cfg.de_bruijn || *idx != 0 {
            alloc.text(name.as_str()).append(AT).append(idx.to_string())
        } else {
            alloc.text(name.as_str())
        }
    }
}

// The captured environment is left out, it is usually much larger than the body.
impl Print for Closure {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let Closure { name, body, .. } = self;
        alloc
            .keyword(FN)
            .append(alloc.space())
            .append(name.as_str())
            .append(alloc.space())
            .append(FAT_ARROW)
            .append(alloc.line().append(body.print_prec(cfg, alloc, PREC_OPEN)).nest(cfg.indent))
            .group()
            .parens_if(prec > PREC_OPEN)
    }
}

impl Print for App {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let App { fun, arg } = self;
        fun.print_prec(cfg, alloc, PREC_APP)
            .append(alloc.line())
            .append(arg.print_prec(cfg, alloc, PREC_ATOM))
            .nest(cfg.indent)
            .group()
            .parens_if(prec > PREC_APP)
    }
}

impl Print for List {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        sequence(alloc, cfg, "[", "]", self.elements.iter().map(|e| e.print(cfg, alloc)))
    }
}

impl Print for Record {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        print_fields(cfg, alloc, &self.fields)
    }
}

impl Print for Field {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let Field { record, key } = self;
        record.print_prec(cfg, alloc, PREC_ATOM).append(DOT).append(key.as_str())
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

impl Print for Merge {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        alloc
            .keyword(MERGE)
            .append(alloc.space())
            .append(self.handlers.print_prec(cfg, alloc, PREC_ATOM))
            .parens_if(prec > PREC_APP)
    }
}

impl Print for IfThenElse {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let IfThenElse { cond, then_branch, else_branch } = self;
        alloc
            .keyword(IF)
            .append(alloc.space())
            .append(cond.print(cfg, alloc))
            .append(alloc.line())
            .append(alloc.keyword(THEN))
            .append(alloc.space())
            .append(then_branch.print(cfg, alloc))
            .append(alloc.line())
            .append(alloc.keyword(ELSE))
            .append(alloc.space())
            .append(else_branch.print(cfg, alloc))
            .group()
            .parens_if(prec > PREC_OPEN)
    }
}

impl Print for BinOp {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        let BinOp { lhs, op, rhs } = self;
        print_bin_op(cfg, alloc, prec, lhs, *op, rhs)
    }
}
