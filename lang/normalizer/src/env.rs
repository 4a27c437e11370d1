use std::rc::Rc;

use pretty::DocAllocator;

use fern_lang_printer::tokens::{COMMA, EQUALS};
use fern_lang_printer::{Alloc, Builder, Precedence, Print, PrintCfg};

use crate::val::{Val, Value, Variable};

/// The environment of an evaluation: an ordered list of bindings, most recently bound first.
///
/// Environments are persistent. Extending an environment never modifies it, so closures
/// can capture it by cloning a pointer, and the environments of different closures share
/// their common tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    head: Option<Rc<Binding>>,
}

#[derive(Debug, PartialEq, Eq)]
struct Binding {
    name: String,
    val: Value,
    rest: Env,
}

impl Env {
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// Extend the environment by binding `name` to `val`, shadowing earlier bindings of `name`
    pub fn bind(&self, name: impl Into<String>, val: Value) -> Env {
        Env { head: Some(Rc::new(Binding { name: name.into(), val, rest: self.clone() })) }
    }

    /// Resolve the variable `name@idx`.
    ///
    /// The `idx`-th binding of `name` (counting from the innermost one) is returned. If there
    /// are not enough bindings of `name`, the variable is free. Free variables are encoded by
    /// a negative index `-k - 1`, where `k` is the number of bindings of `name` still missing.
    pub fn lookup(&self, name: &str, idx: usize) -> Value {
        let mut remaining = idx;
        for (key, val) in self.iter() {
            if key != name {
                continue;
            }
            if remaining == 0 {
                return val.clone();
            }
            remaining -= 1;
        }
        let idx = -(remaining as isize) - 1;
        Rc::new(Val::Variable(Variable { name: name.to_owned(), idx }))
    }

    /// Iterate over the bindings, innermost first
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Binding>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.next?;
        self.next = binding.rest.head.as_deref();
        Some((binding.name.as_str(), &binding.val))
    }
}

// Dropping a long environment recursively could exhaust the stack.
impl Drop for Env {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(binding) = head {
            match Rc::try_unwrap(binding) {
                Ok(mut binding) => head = binding.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl Print for Env {
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        let iter = self.iter().map(|(name, val)| {
            alloc
                .text(name)
                .append(alloc.space())
                .append(EQUALS)
                .append(alloc.space())
                .append(val.print(cfg, alloc))
        });
        alloc.intersperse(iter, alloc.text(COMMA).append(alloc.space())).brackets()
    }
}
