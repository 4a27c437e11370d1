use std::rc::Rc;

use log::{trace, warn};

use fern_lang_printer::PrintToString;
use fern_lang_syntax as syntax;
use fern_lang_syntax::Exp;

use crate::apply::Apply;
use crate::val::{self, Val};

/// The names of the binders in scope during readback, outermost first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCtx {
    names: Vec<String>,
}

impl NameCtx {
    pub fn empty() -> Self {
        Self::default()
    }

    /// How many binders named `name` are in scope
    pub fn count(&self, name: &str) -> usize {
        self.names.iter().filter(|n| *n == name).count()
    }

    /// Run `f` with `name` bound as the innermost binder
    pub fn bind<T, F>(&mut self, name: &str, f: F) -> T
    where
        F: FnOnce(&mut NameCtx) -> T,
    {
        self.names.push(name.to_owned());
        let res = f(self);
        self.names.pop();
        res
    }
}

impl From<Vec<&str>> for NameCtx {
    fn from(names: Vec<&str>) -> Self {
        NameCtx { names: names.into_iter().map(ToOwned::to_owned).collect() }
    }
}

/// A variable standing for the binder `name` about to be added to `names`.
///
/// Its index is the number of binders named `name` already in scope. No variable reachable
/// from that scope carries this index, so instantiating a closure with it cannot capture.
pub fn fresh(name: &str, names: &NameCtx) -> Val {
    let idx = names.count(name) as isize;
    val::Variable { name: name.to_owned(), idx }.into()
}

/// Conversion of values back into syntax
///
/// Variables produced by evaluation are free (negative index) or were introduced by [fresh]
/// for a binder in `names`. A variable with a non-negative index read back outside of the
/// scope of its binder cannot be represented; it is read back as `name@0` and a warning is
/// logged.
pub trait ReadBack {
    type Nf;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf;

    fn read_back_closed(&self) -> Self::Nf {
        self.read_back(&mut NameCtx::empty())
    }
}

impl ReadBack for Val {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let res = match self {
            Val::Variable(v) => v.read_back(names),
            Val::Lambda(v) => v.read_back(names),
            Val::App(v) => v.read_back(names),
            Val::List(v) => v.read_back(names),
            Val::Record(v) => v.read_back(names),
            Val::Field(v) => v.read_back(names),
            Val::Alternative(v) => v.read_back(names),
            Val::Merge(v) => v.read_back(names),
            Val::IfThenElse(v) => v.read_back(names),
            Val::Scalar(scalar) => syntax::Literal { span: None, scalar: scalar.clone() }.into(),
            Val::BinOp(v) => v.read_back(names),
            Val::Builtin(builtin) => syntax::BuiltinRef { span: None, builtin: *builtin }.into(),
        };
        trace!("↓{} ~> {}", self.print_to_string(None), res.print_to_string(None));
        res
    }
}

impl ReadBack for val::Variable {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let val::Variable { name, idx } = self;
        // Only a fresh variable escaping its binder's scope yields a negative index
        let idx = usize::try_from(names.count(name) as isize - idx - 1).unwrap_or_else(|_| {
            warn!("Fresh variable {name}@{idx} read back outside of its binder");
            0
        });
        syntax::Variable { span: None, name: name.clone(), idx }.into()
    }
}

impl ReadBack for val::Closure {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let var = Rc::new(fresh(&self.name, names));
        let body = self.apply(var);
        let body = names.bind(&self.name, |names| body.read_back(names));
        syntax::Lambda { span: None, name: self.name.clone(), body: Rc::new(body) }.into()
    }
}

impl ReadBack for val::App {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let val::App { fun, arg } = self;
        let fun = Box::new(fun.read_back(names));
        let arg = Box::new(arg.read_back(names));
        syntax::App { span: None, fun, arg }.into()
    }
}

impl ReadBack for val::List {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let elements = self.elements.iter().map(|e| e.read_back(names)).collect();
        syntax::List { span: None, elements }.into()
    }
}

impl ReadBack for val::Record {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let fields =
            self.fields.iter().map(|(key, v)| (key.clone(), v.read_back(names))).collect();
        syntax::Record { span: None, fields }.into()
    }
}

impl ReadBack for val::Field {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let val::Field { record, key } = self;
        let record = Box::new(record.read_back(names));
        syntax::Field { span: None, record, key: key.clone() }.into()
    }
}

impl ReadBack for val::Alternative {
    type Nf = Exp;

    fn read_back(&self, _names: &mut NameCtx) -> Self::Nf {
        syntax::Alternative { span: None, name: self.name.clone() }.into()
    }
}

impl ReadBack for val::Merge {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let handlers = Box::new(self.handlers.read_back(names));
        syntax::Merge { span: None, handlers }.into()
    }
}

impl ReadBack for val::IfThenElse {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let val::IfThenElse { cond, then_branch, else_branch } = self;
        syntax::IfThenElse {
            span: None,
            cond: Box::new(cond.read_back(names)),
            then_branch: Box::new(then_branch.read_back(names)),
            else_branch: Box::new(else_branch.read_back(names)),
        }
        .into()
    }
}

impl ReadBack for val::BinOp {
    type Nf = Exp;

    fn read_back(&self, names: &mut NameCtx) -> Self::Nf {
        let val::BinOp { lhs, op, rhs } = self;
        let lhs = Box::new(lhs.read_back(names));
        let rhs = Box::new(rhs.read_back(names));
        syntax::BinOp { span: None, lhs, op: *op, rhs }.into()
    }
}
