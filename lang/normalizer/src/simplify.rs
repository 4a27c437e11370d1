//! Algebraic simplification of operator applications
//!
//! Both operands are fully evaluated. Whenever no rule applies, the result is a neutral
//! [BinOp] value.

use std::rc::Rc;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use ordered_float::OrderedFloat;

use fern_lang_syntax::{Operator, Scalar};

use crate::val::{BinOp, List, Val, Value};

pub fn simplify(lhs: Value, op: Operator, rhs: Value) -> Value {
    match op {
        Operator::And => and(lhs, rhs),
        Operator::Or => or(lhs, rhs),
        Operator::Times => times(lhs, rhs),
        Operator::Plus => plus(lhs, rhs),
        Operator::Append => append(lhs, rhs),
    }
}

fn neutral(lhs: Value, op: Operator, rhs: Value) -> Value {
    Rc::new(BinOp { lhs, op, rhs }.into())
}

fn and(lhs: Value, rhs: Value) -> Value {
    match lhs.as_bool() {
        Some(true) => return rhs,
        Some(false) => return lhs,
        None => (),
    }
    match rhs.as_bool() {
        Some(true) => lhs,
        Some(false) => rhs,
        None => neutral(lhs, Operator::And, rhs),
    }
}

fn or(lhs: Value, rhs: Value) -> Value {
    match lhs.as_bool() {
        Some(true) => return lhs,
        Some(false) => return rhs,
        None => (),
    }
    match rhs.as_bool() {
        Some(true) => rhs,
        Some(false) => lhs,
        None => neutral(lhs, Operator::Or, rhs),
    }
}

fn times(lhs: Value, rhs: Value) -> Value {
    if is_natural(&lhs, BigUint::is_one) {
        return rhs;
    }
    if is_natural(&rhs, BigUint::is_one) {
        return lhs;
    }
    // Zero is absorbing, the other operand need not be a constant
    if is_natural(&lhs, BigUint::is_zero) {
        return lhs;
    }
    if is_natural(&rhs, BigUint::is_zero) {
        return rhs;
    }
    fold_numeric(lhs, Operator::Times, rhs)
}

fn plus(lhs: Value, rhs: Value) -> Value {
    if is_natural(&lhs, BigUint::is_zero) {
        return rhs;
    }
    if is_natural(&rhs, BigUint::is_zero) {
        return lhs;
    }
    fold_numeric(lhs, Operator::Plus, rhs)
}

fn append(lhs: Value, rhs: Value) -> Value {
    match (&*lhs, &*rhs) {
        (Val::Scalar(Scalar::Text(l)), _) if l.is_empty() => rhs,
        (_, Val::Scalar(Scalar::Text(r))) if r.is_empty() => lhs,
        (Val::Scalar(Scalar::Text(l)), Val::Scalar(Scalar::Text(r))) => {
            Rc::new(Val::Scalar(Scalar::Text(format!("{l}{r}"))))
        }
        (Val::List(l), _) if l.elements.is_empty() => rhs,
        (_, Val::List(r)) if r.elements.is_empty() => lhs,
        (Val::List(l), Val::List(r)) => {
            let elements = l.elements.iter().chain(r.elements.iter()).cloned().collect();
            Rc::new(List { elements }.into())
        }
        _ => neutral(lhs, Operator::Append, rhs),
    }
}

fn is_natural(val: &Value, pred: impl Fn(&BigUint) -> bool) -> bool {
    matches!(&**val, Val::Scalar(Scalar::Natural(n)) if pred(n))
}

fn fold_numeric(lhs: Value, op: Operator, rhs: Value) -> Value {
    let operands =
        lhs.as_scalar().zip(rhs.as_scalar()).and_then(|(l, r)| Operands::promote(l, r));
    let Some(operands) = operands else {
        return neutral(lhs, op, rhs);
    };
    let res = match (op, operands) {
        (Operator::Plus, Operands::Natural(l, r)) => Scalar::Natural(l + r),
        (Operator::Times, Operands::Natural(l, r)) => Scalar::Natural(l * r),
        (Operator::Plus, Operands::Integer(l, r)) => Scalar::Integer(l + r),
        (Operator::Times, Operands::Integer(l, r)) => Scalar::Integer(l * r),
        (Operator::Plus, Operands::Double(l, r)) => Scalar::Double(OrderedFloat(l + r)),
        (Operator::Times, Operands::Double(l, r)) => Scalar::Double(OrderedFloat(l * r)),
        _ => return neutral(lhs, op, rhs),
    };
    Rc::new(Val::Scalar(res))
}

/// Two numeric operands, promoted to the smallest numeric type representing both
enum Operands {
    Natural(BigUint, BigUint),
    Integer(BigInt, BigInt),
    Double(f64, f64),
}

impl Operands {
    fn promote(lhs: &Scalar, rhs: &Scalar) -> Option<Self> {
        if let (Scalar::Natural(l), Scalar::Natural(r)) = (lhs, rhs) {
            return Some(Operands::Natural(l.clone(), r.clone()));
        }
        if let (Some(l), Some(r)) = (to_integer(lhs), to_integer(rhs)) {
            return Some(Operands::Integer(l, r));
        }
        Some(Operands::Double(to_double(lhs)?, to_double(rhs)?))
    }
}

fn to_integer(scalar: &Scalar) -> Option<BigInt> {
    match scalar {
        Scalar::Natural(n) => Some(BigInt::from(n.clone())),
        Scalar::Integer(n) => Some(n.clone()),
        _ => None,
    }
}

fn to_double(scalar: &Scalar) -> Option<f64> {
    match scalar {
        Scalar::Natural(n) => n.to_f64(),
        Scalar::Integer(n) => n.to_f64(),
        Scalar::Double(d) => Some(d.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::val::Variable;

    fn nat(n: u32) -> Value {
        Rc::new(Val::Scalar(Scalar::Natural(BigUint::from(n))))
    }

    fn int(n: i64) -> Value {
        Rc::new(Val::Scalar(Scalar::Integer(BigInt::from(n))))
    }

    fn double(d: f64) -> Value {
        Rc::new(Val::Scalar(Scalar::Double(OrderedFloat(d))))
    }

    fn text(s: &str) -> Value {
        Rc::new(Val::Scalar(Scalar::Text(s.to_owned())))
    }

    fn list(elements: Vec<Value>) -> Value {
        Rc::new(List { elements }.into())
    }

    fn free(name: &str) -> Value {
        Rc::new(Variable { name: name.to_owned(), idx: -1 }.into())
    }

    #[test]
    fn and_truth_table() {
        for l in [true, false] {
            for r in [true, false] {
                assert_eq!(simplify(Val::bool(l), Operator::And, Val::bool(r)), Val::bool(l && r));
            }
        }
    }

    #[test]
    fn or_truth_table() {
        for l in [true, false] {
            for r in [true, false] {
                assert_eq!(simplify(Val::bool(l), Operator::Or, Val::bool(r)), Val::bool(l || r));
            }
        }
    }

    #[test]
    fn or_with_neutral_operand() {
        let x = free("x");
        assert_eq!(simplify(x.clone(), Operator::Or, Val::bool(true)), Val::bool(true));
        assert_eq!(simplify(x.clone(), Operator::Or, Val::bool(false)), x);
        assert_eq!(simplify(Val::bool(false), Operator::Or, x.clone()), x);
    }

    #[test]
    fn and_with_neutral_operands_is_neutral() {
        let res = simplify(free("x"), Operator::And, free("y"));
        let expected: Value =
            Rc::new(BinOp { lhs: free("x"), op: Operator::And, rhs: free("y") }.into());
        assert_eq!(res, expected);
    }

    #[test]
    fn times_absorbs_on_the_right() {
        assert_eq!(simplify(free("x"), Operator::Times, nat(0)), nat(0));
        assert_eq!(simplify(free("x"), Operator::Times, nat(1)), free("x"));
    }

    #[test]
    fn fold_naturals() {
        assert_eq!(simplify(nat(2), Operator::Plus, nat(3)), nat(5));
        assert_eq!(simplify(nat(2), Operator::Times, nat(3)), nat(6));
    }

    #[test]
    fn fold_promotes_to_integer() {
        assert_eq!(simplify(nat(2), Operator::Plus, int(-5)), int(-3));
        assert_eq!(simplify(int(-2), Operator::Times, int(-3)), int(6));
    }

    #[test]
    fn fold_promotes_to_double() {
        assert_eq!(simplify(nat(2), Operator::Plus, double(0.5)), double(2.5));
        assert_eq!(simplify(double(1.5), Operator::Times, int(-2)), double(-3.0));
    }

    #[test]
    fn identity_applies_before_promotion() {
        assert_eq!(simplify(nat(0), Operator::Plus, double(0.5)), double(0.5));
        assert_eq!(simplify(int(0), Operator::Plus, double(0.5)), double(0.5));
    }

    #[test]
    fn non_numeric_operands_stay_neutral() {
        let res = simplify(text("a"), Operator::Plus, nat(2));
        let expected: Value =
            Rc::new(BinOp { lhs: text("a"), op: Operator::Plus, rhs: nat(2) }.into());
        assert_eq!(res, expected);
    }

    #[test]
    fn append_text() {
        assert_eq!(simplify(text("ab"), Operator::Append, text("cd")), text("abcd"));
        assert_eq!(simplify(text(""), Operator::Append, free("s")), free("s"));
        assert_eq!(simplify(free("s"), Operator::Append, text("")), free("s"));
    }

    #[test]
    fn append_text_with_neutral_operand_is_neutral() {
        let res = simplify(text("ab"), Operator::Append, free("s"));
        assert_eq!(res, neutral(text("ab"), Operator::Append, free("s")));
        let res = simplify(free("s"), Operator::Append, text("cd"));
        assert_eq!(res, neutral(free("s"), Operator::Append, text("cd")));
        let res = simplify(text("ab"), Operator::Append, nat(1));
        assert_eq!(res, neutral(text("ab"), Operator::Append, nat(1)));
    }

    #[test]
    fn append_lists() {
        let res = simplify(list(vec![nat(1)]), Operator::Append, list(vec![nat(2), nat(3)]));
        assert_eq!(res, list(vec![nat(1), nat(2), nat(3)]));
        assert_eq!(simplify(list(vec![]), Operator::Append, free("xs")), free("xs"));
        assert_eq!(simplify(free("xs"), Operator::Append, list(vec![])), free("xs"));
    }
}
