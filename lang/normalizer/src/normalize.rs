use crate::env::Env;
use crate::eval::Eval;
use crate::read_back::ReadBack;
use crate::val::Value;
use fern_lang_syntax::Exp;

pub trait Normalize {
    type Nf;

    /// Evaluate under `env` and read the result back.
    ///
    /// Readback starts without binders in scope, variables that `env` leaves unbound are
    /// read back as free variables.
    fn normalize(&self, env: &Env) -> Self::Nf;

    fn normalize_in_empty_env(&self) -> Self::Nf {
        self.normalize(&Env::empty())
    }
}

impl<T> Normalize for T
where
    T: Eval<Val = Value>,
{
    type Nf = Exp;

    fn normalize(&self, env: &Env) -> Self::Nf {
        let val = self.eval(env);
        val.read_back_closed()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use num_bigint::{BigInt, BigUint};
    use ordered_float::OrderedFloat;

    use fern_lang_printer::PrintToString;
    use fern_lang_syntax::*;

    use super::*;
    use crate::val::{self, Val};

    fn var(name: &str, idx: usize) -> Exp {
        Variable { span: None, name: name.to_owned(), idx }.into()
    }

    fn lambda(name: &str, body: Exp) -> Exp {
        Lambda { span: None, name: name.to_owned(), body: Rc::new(body) }.into()
    }

    fn app(fun: Exp, arg: Exp) -> Exp {
        App { span: None, fun: Box::new(fun), arg: Box::new(arg) }.into()
    }

    fn apps(fun: Exp, args: Vec<Exp>) -> Exp {
        args.into_iter().fold(fun, app)
    }

    fn scalar(scalar: Scalar) -> Exp {
        Literal { span: None, scalar }.into()
    }

    fn nat(n: u32) -> Exp {
        scalar(Scalar::Natural(BigUint::from(n)))
    }

    fn int(n: i64) -> Exp {
        scalar(Scalar::Integer(BigInt::from(n)))
    }

    fn double(d: f64) -> Exp {
        scalar(Scalar::Double(OrderedFloat(d)))
    }

    fn text(s: &str) -> Exp {
        scalar(Scalar::Text(s.to_owned()))
    }

    fn bool_lit(b: bool) -> Exp {
        scalar(Scalar::Bool(b))
    }

    fn bin_op(lhs: Exp, op: Operator, rhs: Exp) -> Exp {
        BinOp { span: None, lhs: Box::new(lhs), op, rhs: Box::new(rhs) }.into()
    }

    fn list(elements: Vec<Exp>) -> Exp {
        List { span: None, elements }.into()
    }

    fn record(fields: Vec<(&str, Exp)>) -> Exp {
        let fields = fields.into_iter().map(|(k, e)| (k.to_owned(), e)).collect();
        Record { span: None, fields }.into()
    }

    fn tag(name: &str) -> Exp {
        Alternative { span: None, name: name.to_owned() }.into()
    }

    fn merge(handlers: Exp) -> Exp {
        Merge { span: None, handlers: Box::new(handlers) }.into()
    }

    fn builtin(builtin: Builtin) -> Exp {
        BuiltinRef { span: None, builtin }.into()
    }

    fn let_in(name: &str, assignment: Exp, body: Exp) -> Exp {
        let binding = Binding {
            span: None,
            name: name.to_owned(),
            annotation: None,
            assignment: Box::new(assignment),
        };
        LocalLet { span: None, bindings: vec![binding], body: Box::new(body) }.into()
    }

    /// fn x => fn acc => acc + x
    fn add_to_acc() -> Exp {
        lambda("x", lambda("acc", bin_op(var("acc", 0), Operator::Plus, var("x", 0))))
    }

    /// fn n => n + 1
    fn increment() -> Exp {
        lambda("n", bin_op(var("n", 0), Operator::Plus, nat(1)))
    }

    fn normalize(exp: &Exp) -> Exp {
        exp.normalize_in_empty_env()
    }

    #[test]
    fn free_variable_encoding() {
        assert_eq!(
            var("x", 0).eval(&Env::empty()),
            Rc::new(Val::from(val::Variable { name: "x".to_owned(), idx: -1 }))
        );
    }

    #[test]
    fn round_trip_of_normal_values() {
        let exps = vec![
            nat(3),
            list(vec![int(-1), double(0.5), text("a")]),
            record(vec![("k", lambda("x", var("x", 0))), ("b", bool_lit(true))]),
            lambda("x", lambda("y", bin_op(var("x", 0), Operator::Plus, var("y", 0)))),
            app(tag("Left"), nat(2)),
            merge(record(vec![("Left", increment())])),
            builtin(Builtin::ListMap),
            // closures which captured an environment
            app(lambda("y", lambda("x", var("y", 0))), nat(1)),
            let_in("f", increment(), lambda("z", app(var("f", 0), var("z", 0)))),
            app(lambda("y", record(vec![("g", lambda("x", var("y", 0)))])), var("w", 0)),
        ];
        for exp in exps {
            let val = exp.eval(&Env::empty());
            let quoted = val.read_back_closed();
            assert_eq!(quoted.eval(&Env::empty()), val, "{}", exp.print_to_string(None));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let exps = vec![
            app(lambda("x", bin_op(var("x", 0), Operator::Times, var("y", 0))), nat(1)),
            lambda("x", app(lambda("y", lambda("x", var("y", 0))), var("x", 0))),
            apps(builtin(Builtin::ListFold), vec![var("xs", 0), add_to_acc(), nat(0)]),
            let_in("f", increment(), lambda("z", app(var("f", 0), app(var("f", 0), var("z", 0))))),
            bin_op(text("a"), Operator::Append, bin_op(var("s", 0), Operator::Append, text(""))),
        ];
        for exp in exps {
            let once = normalize(&exp);
            assert_eq!(normalize(&once), once, "{}", exp.print_to_string(None));
        }
    }

    #[test]
    fn arithmetic_identities_with_free_operand() {
        let x = var("x", 0);
        assert_eq!(normalize(&bin_op(nat(0), Operator::Plus, x.clone())), x);
        assert_eq!(normalize(&bin_op(x.clone(), Operator::Plus, nat(0))), x);
        assert_eq!(normalize(&bin_op(nat(1), Operator::Times, x.clone())), x);
        assert_eq!(normalize(&bin_op(nat(0), Operator::Times, x.clone())), nat(0));
    }

    #[test]
    fn and_with_stuck_left_operand() {
        let exp = bin_op(var("x", 0), Operator::And, bool_lit(false));
        assert_eq!(normalize(&exp), bool_lit(false));
        let exp = bin_op(var("x", 0), Operator::And, bool_lit(true));
        assert_eq!(normalize(&exp), var("x", 0));
    }

    #[test]
    fn list_fold_and_map() {
        let xs = list(vec![nat(1), nat(2), nat(3)]);
        let fold = apps(builtin(Builtin::ListFold), vec![xs.clone(), add_to_acc(), nat(0)]);
        assert_eq!(normalize(&fold), nat(6));
        let map = apps(builtin(Builtin::ListMap), vec![increment(), xs]);
        assert_eq!(normalize(&map), list(vec![nat(2), nat(3), nat(4)]));
    }

    #[test]
    fn list_fold_combines_left_to_right() {
        // fn x => fn acc => acc ++ x
        let cons = lambda("x", lambda("acc", bin_op(var("acc", 0), Operator::Append, var("x", 0))));
        let xs = list(vec![text("a"), text("b"), text("c")]);
        let fold = apps(builtin(Builtin::ListFold), vec![xs, cons, text("")]);
        assert_eq!(normalize(&fold), text("abc"));
    }

    #[test]
    fn long_folds_do_not_exhaust_the_stack() {
        let xs = list((0..100_000).map(|_| nat(1)).collect());
        let fold = apps(builtin(Builtin::ListFold), vec![xs, add_to_acc(), nat(0)]);
        assert_eq!(normalize(&fold), nat(100_000));
        let fold = apps(builtin(Builtin::NaturalFold), vec![nat(100_000), increment(), nat(0)]);
        assert_eq!(normalize(&fold), nat(100_000));
    }

    #[test]
    fn natural_fold() {
        let double_it = lambda("n", bin_op(var("n", 0), Operator::Times, nat(2)));
        let exp = apps(builtin(Builtin::NaturalFold), vec![nat(3), double_it, nat(1)]);
        assert_eq!(normalize(&exp), nat(8));
    }

    #[test]
    fn partially_applied_builtins_are_stuck() {
        let exp = apps(builtin(Builtin::ListFold), vec![list(vec![nat(1)]), add_to_acc()]);
        let once = normalize(&exp);
        assert_eq!(once.print_to_string(None), "List/fold [1] (fn x => fn acc => acc + x)");
        let exp = app(builtin(Builtin::ListLength), var("xs", 0));
        assert_eq!(normalize(&exp), exp);
    }

    #[test]
    fn builtins_on_scalars() {
        let length = app(builtin(Builtin::ListLength), list(vec![nat(5), nat(6)]));
        assert_eq!(normalize(&length), nat(2));
        assert_eq!(normalize(&app(builtin(Builtin::IntegerEven), int(-4))), bool_lit(true));
        assert_eq!(normalize(&app(builtin(Builtin::IntegerOdd), int(-3))), bool_lit(true));
        assert_eq!(normalize(&app(builtin(Builtin::IntegerOdd), nat(10))), bool_lit(false));
        assert_eq!(normalize(&app(builtin(Builtin::DoubleShow), double(1.0))), text("1.0"));
        assert_eq!(normalize(&app(builtin(Builtin::DoubleShow), int(-7))), text("-7"));
        assert_eq!(normalize(&app(builtin(Builtin::DoubleShow), nat(42))), text("42"));
    }

    #[test]
    fn builtins_on_wrong_scalars_are_stuck() {
        let exp = app(builtin(Builtin::IntegerEven), text("2"));
        assert_eq!(normalize(&exp), exp);
    }

    #[test]
    fn capture_avoidance() {
        let exp = lambda("x", lambda("x", app(var("x", 1), var("x", 0))));
        assert_eq!(normalize(&exp), exp);
        // (fn y => fn x => y) x  reduces to  fn x => x@1
        let exp = app(lambda("y", lambda("x", var("y", 0))), var("x", 0));
        assert_eq!(normalize(&exp), lambda("x", var("x", 1)));
    }

    #[test]
    fn merge_dispatches_on_tag() {
        let handlers = record(vec![("a", var("f", 0)), ("b", var("g", 0))]);
        let exp = app(merge(handlers), app(tag("a"), nat(5)));
        assert_eq!(normalize(&exp), app(var("f", 0), nat(5)));
        let handlers = record(vec![("a", increment()), ("b", lambda("n", var("n", 0)))]);
        let exp = app(merge(handlers), app(tag("a"), nat(5)));
        assert_eq!(normalize(&exp), nat(6));
    }

    #[test]
    fn merge_on_unknown_tag_is_stuck() {
        let handlers = record(vec![("a", var("f", 0))]);
        let exp = app(merge(handlers), app(tag("c"), nat(5)));
        assert_eq!(normalize(&exp), exp);
    }

    #[test]
    fn let_sequencing_and_shadowing() {
        // let x = 1 in let x = x + 1 in x@0 + x@1
        let body = bin_op(var("x", 0), Operator::Plus, var("x", 1));
        let inner = let_in("x", bin_op(var("x", 0), Operator::Plus, nat(1)), body);
        let exp = let_in("x", nat(1), inner);
        assert_eq!(normalize(&exp), nat(3));
    }

    #[test]
    fn normalize_under_env() {
        let two = Rc::new(Val::Scalar(Scalar::Natural(BigUint::from(2u32))));
        let env = Env::empty().bind("x", two);
        let exp = bin_op(var("x", 0), Operator::Times, var("x", 1));
        assert_eq!(exp.normalize(&env), bin_op(nat(2), Operator::Times, var("x", 0)));
    }
}
