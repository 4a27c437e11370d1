//! Function application and the reduction rules of the builtins

use std::rc::Rc;

use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use fern_lang_syntax::{Builtin, Scalar};

use crate::eval::Eval;
use crate::val::{self, App, Closure, Merge, Val, Value};

pub trait Apply {
    fn apply(&self, arg: Value) -> Value;
}

impl Apply for Closure {
    /// Beta reduction: evaluate the body with the argument bound to the closure's name
    fn apply(&self, arg: Value) -> Value {
        let Closure { name, env, body } = self;
        body.eval(&env.bind(name.clone(), arg))
    }
}

/// Apply `fun` to `arg`.
///
/// Closures are beta reduced, merges dispatch on tagged values and saturated builtins
/// compute their result. Everything else results in a neutral application.
pub fn apply(fun: Value, arg: Value) -> Value {
    match &*fun {
        Val::Lambda(closure) => return closure.apply(arg),
        Val::Merge(merge) => {
            if let Some(res) = dispatch(merge, &arg) {
                return res;
            }
        }
        _ => (),
    }
    if let Some((builtin, mut args)) = builtin_spine(&fun) {
        args.push(&arg);
        if let Some(res) = apply_builtin(builtin, &args) {
            return res;
        }
    }
    Rc::new(App { fun, arg }.into())
}

/// Dispatch on a tagged value `Tag payload` to the handler for `Tag`
fn dispatch(merge: &Merge, arg: &Value) -> Option<Value> {
    let Val::Record(handlers) = &*merge.handlers else {
        return None;
    };
    let Val::App(App { fun, arg: payload }) = &**arg else {
        return None;
    };
    let Val::Alternative(val::Alternative { name }) = &**fun else {
        return None;
    };
    let handler = handlers.get(name)?;
    Some(apply(handler.clone(), payload.clone()))
}

/// Decompose a neutral application `b a_1 ... a_n` of a builtin `b`
fn builtin_spine(fun: &Value) -> Option<(Builtin, Vec<&Value>)> {
    let mut args = Vec::new();
    let mut head = fun;
    loop {
        match &**head {
            Val::App(App { fun, arg }) => {
                args.push(arg);
                head = fun;
            }
            Val::Builtin(builtin) => {
                args.reverse();
                return Some((*builtin, args));
            }
            _ => return None,
        }
    }
}

/// Reduce a builtin applied to all of its arguments.
///
/// Returns `None` if the builtin is not yet saturated or an argument does not have the
/// shape the builtin computes on.
fn apply_builtin(builtin: Builtin, args: &[&Value]) -> Option<Value> {
    let res = match (builtin, args) {
        (Builtin::ListFold, [list, cons, nil]) => {
            let Val::List(list) = &***list else { return None };
            list_fold(list, cons, nil)
        }
        (Builtin::ListLength, [list]) => {
            let Val::List(list) = &***list else { return None };
            natural(BigUint::from(list.elements.len()))
        }
        (Builtin::ListMap, [f, list]) => {
            let Val::List(list) = &***list else { return None };
            let elements = list.elements.iter().map(|e| apply((*f).clone(), e.clone())).collect();
            Rc::new(val::List { elements }.into())
        }
        (Builtin::NaturalFold, [n, succ, zero]) => {
            let Val::Scalar(Scalar::Natural(n)) = &***n else { return None };
            natural_fold(n, succ, zero)
        }
        (Builtin::IntegerEven, [n]) => Val::bool(is_even(n.as_scalar()?)?),
        (Builtin::IntegerOdd, [n]) => Val::bool(!is_even(n.as_scalar()?)?),
        (Builtin::DoubleShow, [n]) => {
            Rc::new(Val::Scalar(Scalar::Text(n.as_scalar()?.show_numeric()?)))
        }
        _ => return None,
    };
    Some(res)
}

/// `List/fold [x_1, ..., x_n] cons nil` is `cons x_n (... (cons x_1 nil))`: the elements
/// are combined with the accumulator from left to right.
fn list_fold(list: &val::List, cons: &Value, nil: &Value) -> Value {
    debug!("List/fold over {} elements", list.elements.len());
    let mut acc = nil.clone();
    for elem in &list.elements {
        acc = apply(apply(cons.clone(), elem.clone()), acc);
    }
    acc
}

/// `Natural/fold n succ zero` applies `succ` n times to `zero`
fn natural_fold(n: &BigUint, succ: &Value, zero: &Value) -> Value {
    debug!("Natural/fold with {n} iterations");
    let mut acc = zero.clone();
    let mut i = BigUint::zero();
    while &i != n {
        i += 1usize;
        acc = apply(succ.clone(), acc);
    }
    acc
}

fn natural(n: BigUint) -> Value {
    Rc::new(Val::Scalar(Scalar::Natural(n)))
}

fn is_even(scalar: &Scalar) -> Option<bool> {
    match scalar {
        Scalar::Natural(n) => Some((n % &BigUint::from(2u32)).is_zero()),
        Scalar::Integer(n) => Some((n % &BigInt::from(2)).is_zero()),
        _ => None,
    }
}
