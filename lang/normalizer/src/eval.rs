use std::rc::Rc;

use log::trace;

use fern_lang_printer::PrintToString;
use fern_lang_syntax::*;

use crate::apply::apply;
use crate::env::Env;
use crate::simplify::simplify;
use crate::val::{self, Closure, Val, Value};

pub trait Eval {
    type Val;

    fn eval(&self, env: &Env) -> Self::Val;
}

impl Eval for Exp<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let e = match self {
            Exp::Variable(e) => e.eval(env),
            Exp::App(e) => e.eval(env),
            Exp::Lambda(e) => e.eval(env),
            Exp::Anno(e) => e.eval(env),
            Exp::LocalLet(e) => e.eval(env),
            Exp::List(e) => e.eval(env),
            Exp::Record(e) => e.eval(env),
            Exp::Field(e) => e.eval(env),
            Exp::Alternative(e) => e.eval(env),
            Exp::Merge(e) => e.eval(env),
            Exp::IfThenElse(e) => e.eval(env),
            Exp::Literal(e) => e.eval(env),
            Exp::BinOp(e) => e.eval(env),
            Exp::Builtin(e) => e.eval(env),
            Exp::Embed(e) => e.eval(env),
        };
        trace!(
            "{} |- {} ▷ {}",
            env.print_to_string(None),
            self.print_to_string(None),
            e.print_to_string(None)
        );
        e
    }
}

/// Plain syntax is evaluated by viewing it as syntax without embedded values
impl Eval for Exp {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        self.clone().embed::<Value>().eval(env)
    }
}

impl Eval for Variable {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let Variable { name, idx, .. } = self;
        env.lookup(name, *idx)
    }
}

impl Eval for App<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let App { fun, arg, .. } = self;
        apply(fun.eval(env), arg.eval(env))
    }
}

impl Eval for Lambda<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let Lambda { name, body, .. } = self;
        Rc::new(Closure { name: name.clone(), env: env.clone(), body: body.clone() }.into())
    }
}

impl Eval for Anno<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        self.exp.eval(env)
    }
}

impl Eval for LocalLet<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let LocalLet { bindings, body, .. } = self;
        let env = bindings.iter().fold(env.clone(), |env, binding| {
            let val = binding.assignment.eval(&env);
            env.bind(binding.name.clone(), val)
        });
        body.eval(&env)
    }
}

impl Eval for List<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let elements = self.elements.iter().map(|e| e.eval(env)).collect();
        Rc::new(val::List { elements }.into())
    }
}

impl Eval for Record<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let fields = self.fields.iter().map(|(key, e)| (key.clone(), e.eval(env))).collect();
        Rc::new(val::Record { fields }.into())
    }
}

impl Eval for Field<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let Field { record, key, .. } = self;
        let record = record.eval(env);
        let projected = match &*record {
            Val::Record(fields) => fields.get(key).cloned(),
            _ => None,
        };
        projected.unwrap_or_else(|| Rc::new(val::Field { record, key: key.clone() }.into()))
    }
}

impl Eval for Alternative {
    type Val = Value;

    fn eval(&self, _env: &Env) -> Self::Val {
        Rc::new(val::Alternative { name: self.name.clone() }.into())
    }
}

impl Eval for Merge<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        Rc::new(val::Merge { handlers: self.handlers.eval(env) }.into())
    }
}

impl Eval for IfThenElse<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let IfThenElse { cond, then_branch, else_branch, .. } = self;
        let cond = cond.eval(env);
        match cond.as_bool() {
            Some(true) => then_branch.eval(env),
            Some(false) => else_branch.eval(env),
            None => Rc::new(
                val::IfThenElse {
                    cond,
                    then_branch: then_branch.eval(env),
                    else_branch: else_branch.eval(env),
                }
                .into(),
            ),
        }
    }
}

impl Eval for Literal {
    type Val = Value;

    fn eval(&self, _env: &Env) -> Self::Val {
        Rc::new(Val::Scalar(self.scalar.clone()))
    }
}

impl Eval for BinOp<Value> {
    type Val = Value;

    fn eval(&self, env: &Env) -> Self::Val {
        let BinOp { lhs, op, rhs, .. } = self;
        simplify(lhs.eval(env), *op, rhs.eval(env))
    }
}

impl Eval for BuiltinRef {
    type Val = Value;

    fn eval(&self, _env: &Env) -> Self::Val {
        Rc::new(Val::Builtin(self.builtin))
    }
}

impl Eval for Embed<Value> {
    type Val = Value;

    fn eval(&self, _env: &Env) -> Self::Val {
        self.payload.clone()
    }
}

impl<T: Eval> Eval for Box<T> {
    type Val = T::Val;

    fn eval(&self, env: &Env) -> Self::Val {
        (**self).eval(env)
    }
}

impl<T: Eval> Eval for Rc<T> {
    type Val = T::Val;

    fn eval(&self, env: &Env) -> Self::Val {
        (**self).eval(env)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    fn nat(n: u32) -> Exp {
        Literal { span: None, scalar: Scalar::Natural(BigUint::from(n)) }.into()
    }

    fn nat_val(n: u32) -> Value {
        Rc::new(Val::Scalar(Scalar::Natural(BigUint::from(n))))
    }

    fn var(name: &str, idx: usize) -> Exp {
        Variable { span: None, name: name.to_owned(), idx }.into()
    }

    fn free(name: &str, idx: isize) -> Value {
        Rc::new(val::Variable { name: name.to_owned(), idx }.into())
    }

    fn binding(name: &str, assignment: Exp) -> Binding<Never> {
        Binding {
            span: None,
            name: name.to_owned(),
            annotation: None,
            assignment: Box::new(assignment),
        }
    }

    fn let_in(bindings: Vec<Binding<Never>>, body: Exp) -> Exp {
        LocalLet { span: None, bindings, body: Box::new(body) }.into()
    }

    fn bool_lit(b: bool) -> Exp {
        Literal { span: None, scalar: Scalar::Bool(b) }.into()
    }

    fn if_then_else(cond: Exp, then_branch: Exp, else_branch: Exp) -> Exp {
        IfThenElse {
            span: None,
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
        .into()
    }

    fn record(fields: Vec<(&str, Exp)>) -> Exp {
        let fields = fields.into_iter().map(|(k, e)| (k.to_owned(), e)).collect();
        Record { span: None, fields }.into()
    }

    fn field(record: Exp, key: &str) -> Exp {
        Field { span: None, record: Box::new(record), key: key.to_owned() }.into()
    }

    #[test]
    fn let_is_sequential() {
        // let x = 1, y = x + 1 in y
        let plus: Exp = BinOp {
            span: None,
            lhs: Box::new(var("x", 0)),
            op: Operator::Plus,
            rhs: Box::new(nat(1)),
        }
        .into();
        let exp = let_in(vec![binding("x", nat(1)), binding("y", plus)], var("y", 0));
        assert_eq!(exp.eval(&Env::empty()), nat_val(2));
    }

    #[test]
    fn let_shadows() {
        let exp = let_in(vec![binding("x", nat(1)), binding("x", nat(2))], var("x", 1));
        assert_eq!(exp.eval(&Env::empty()), nat_val(1));
        let exp = let_in(vec![binding("x", nat(1)), binding("x", nat(2))], var("x", 0));
        assert_eq!(exp.eval(&Env::empty()), nat_val(2));
    }

    #[test]
    fn let_is_not_recursive() {
        let exp = let_in(vec![binding("x", var("x", 0))], var("x", 0));
        assert_eq!(exp.eval(&Env::empty()), free("x", -1));
    }

    #[test]
    fn if_selects_branch() {
        let exp = if_then_else(bool_lit(false), nat(1), nat(2));
        assert_eq!(exp.eval(&Env::empty()), nat_val(2));
    }

    #[test]
    fn if_on_neutral_condition() {
        let exp = if_then_else(var("b", 0), nat(1), nat(2));
        let expected: Value = Rc::new(
            val::IfThenElse {
                cond: free("b", -1),
                then_branch: nat_val(1),
                else_branch: nat_val(2),
            }
            .into(),
        );
        assert_eq!(exp.eval(&Env::empty()), expected);
    }

    #[test]
    fn field_projection() {
        let exp = field(record(vec![("a", nat(1)), ("b", nat(2))]), "b");
        assert_eq!(exp.eval(&Env::empty()), nat_val(2));
    }

    #[test]
    fn field_projection_on_neutral_record() {
        let exp = field(var("r", 0), "a");
        let expected: Value =
            Rc::new(val::Field { record: free("r", -1), key: "a".to_owned() }.into());
        assert_eq!(exp.eval(&Env::empty()), expected);
    }

    #[test]
    fn record_preserves_order() {
        let exp = record(vec![("z", nat(1)), ("a", nat(2))]);
        let fields = vec![("z".to_owned(), nat_val(1)), ("a".to_owned(), nat_val(2))];
        let expected: Value = Rc::new(val::Record { fields }.into());
        assert_eq!(exp.eval(&Env::empty()), expected);
    }

    #[test]
    fn annotation_is_erased() {
        let typ = Type("Natural".to_owned());
        let exp: Exp = Anno { span: None, exp: Box::new(nat(3)), typ }.into();
        assert_eq!(exp.eval(&Env::empty()), nat_val(3));
    }

    #[test]
    fn embed_returns_payload() {
        let exp: Exp<Value> = Embed { span: None, payload: free("y", -3) }.into();
        assert_eq!(exp.eval(&Env::empty()), free("y", -3));
    }

    #[test]
    fn lambda_captures_env() {
        let lambda: Exp =
            Lambda { span: None, name: "x".to_owned(), body: Rc::new(var("y", 0)) }.into();
        let env = Env::empty().bind("y", nat_val(7));
        let Val::Lambda(closure) = &*lambda.eval(&env) else { panic!("expected a closure") };
        assert_eq!(closure.env, env);
    }
}
