use std::rc::Rc;

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::Never;

mod alternative;
mod anno;
mod app;
mod bin_op;
mod builtin;
mod embed;
mod field;
mod if_then_else;
mod lambda;
mod list;
mod literal;
mod local_let;
mod merge;
mod record;
mod variable;

pub use alternative::*;
pub use anno::*;
pub use app::*;
pub use bin_op::*;
pub use builtin::*;
pub use embed::*;
pub use field::*;
pub use if_then_else::*;
pub use lambda::*;
pub use list::*;
pub use literal::*;
pub use local_let::*;
pub use merge::*;
pub use record::*;
pub use variable::*;

// Exp
//
//

/// An expression of the surface language after type checking.
///
/// The type parameter `E` is the payload of `Embed` nodes. Plain syntax trees use the
/// uninhabited [Never]; the normalizer splices already evaluated values into trees of
/// type `Exp<Value>`.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(Eq, PartialEq, Hash)]
pub enum Exp<E = Never> {
    Variable(Variable),
    App(App<E>),
    Lambda(Lambda<E>),
    Anno(Anno<E>),
    LocalLet(LocalLet<E>),
    List(List<E>),
    Record(Record<E>),
    Field(Field<E>),
    Alternative(Alternative),
    Merge(Merge<E>),
    IfThenElse(IfThenElse<E>),
    Literal(Literal),
    BinOp(BinOp<E>),
    Builtin(BuiltinRef),
    Embed(Embed<E>),
}

impl<E> Exp<E> {
    /// Replace the payload of every `Embed` node, keeping the rest of the tree intact.
    pub fn map_embed<E2, F>(self, f: &mut F) -> Exp<E2>
    where
        E: Clone,
        F: FnMut(E) -> E2,
    {
        match self {
            Exp::Variable(e) => Exp::Variable(e),
            Exp::App(App { span, fun, arg }) => Exp::App(App {
                span,
                fun: Box::new(fun.map_embed(f)),
                arg: Box::new(arg.map_embed(f)),
            }),
            Exp::Lambda(Lambda { span, name, body }) => {
                let body = Rc::unwrap_or_clone(body).map_embed(f);
                Exp::Lambda(Lambda { span, name, body: Rc::new(body) })
            }
            Exp::Anno(Anno { span, exp, typ }) => {
                Exp::Anno(Anno { span, exp: Box::new(exp.map_embed(f)), typ })
            }
            Exp::LocalLet(LocalLet { span, bindings, body }) => Exp::LocalLet(LocalLet {
                span,
                bindings: bindings
                    .into_iter()
                    .map(|Binding { span, name, annotation, assignment }| Binding {
                        span,
                        name,
                        annotation,
                        assignment: Box::new(assignment.map_embed(f)),
                    })
                    .collect(),
                body: Box::new(body.map_embed(f)),
            }),
            Exp::List(List { span, elements }) => Exp::List(List {
                span,
                elements: elements.into_iter().map(|e| e.map_embed(f)).collect(),
            }),
            Exp::Record(Record { span, fields }) => Exp::Record(Record {
                span,
                fields: fields.into_iter().map(|(key, e)| (key, e.map_embed(f))).collect(),
            }),
            Exp::Field(Field { span, record, key }) => {
                Exp::Field(Field { span, record: Box::new(record.map_embed(f)), key })
            }
            Exp::Alternative(e) => Exp::Alternative(e),
            Exp::Merge(Merge { span, handlers }) => {
                Exp::Merge(Merge { span, handlers: Box::new(handlers.map_embed(f)) })
            }
            Exp::IfThenElse(IfThenElse { span, cond, then_branch, else_branch }) => {
                Exp::IfThenElse(IfThenElse {
                    span,
                    cond: Box::new(cond.map_embed(f)),
                    then_branch: Box::new(then_branch.map_embed(f)),
                    else_branch: Box::new(else_branch.map_embed(f)),
                })
            }
            Exp::Literal(e) => Exp::Literal(e),
            Exp::BinOp(BinOp { span, lhs, op, rhs }) => Exp::BinOp(BinOp {
                span,
                lhs: Box::new(lhs.map_embed(f)),
                op,
                rhs: Box::new(rhs.map_embed(f)),
            }),
            Exp::Builtin(e) => Exp::Builtin(e),
            Exp::Embed(Embed { span, payload }) => Exp::Embed(Embed { span, payload: f(payload) }),
        }
    }
}

impl Exp<Never> {
    /// View a syntax tree without embedded values as a tree with an arbitrary payload.
    pub fn embed<E>(self) -> Exp<E> {
        self.map_embed(&mut |never| match never {})
    }
}

impl<E: Print> Print for Exp<E> {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        match self {
            Exp::Variable(e) => e.print_prec(cfg, alloc, prec),
            Exp::App(e) => e.print_prec(cfg, alloc, prec),
            Exp::Lambda(e) => e.print_prec(cfg, alloc, prec),
            Exp::Anno(e) => e.print_prec(cfg, alloc, prec),
            Exp::LocalLet(e) => e.print_prec(cfg, alloc, prec),
            Exp::List(e) => e.print_prec(cfg, alloc, prec),
            Exp::Record(e) => e.print_prec(cfg, alloc, prec),
            Exp::Field(e) => e.print_prec(cfg, alloc, prec),
            Exp::Alternative(e) => e.print_prec(cfg, alloc, prec),
            Exp::Merge(e) => e.print_prec(cfg, alloc, prec),
            Exp::IfThenElse(e) => e.print_prec(cfg, alloc, prec),
            Exp::Literal(e) => e.print_prec(cfg, alloc, prec),
            Exp::BinOp(e) => e.print_prec(cfg, alloc, prec),
            Exp::Builtin(e) => e.print_prec(cfg, alloc, prec),
            Exp::Embed(e) => e.print_prec(cfg, alloc, prec),
        }
    }
}
