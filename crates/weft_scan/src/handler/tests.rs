use std::cell::Cell;
use std::convert::Infallible;

use super::*;

struct Counter {
    calls: Cell<usize>,
}

impl TokenHandler for Counter {
    type Error = Infallible;

    fn handle_token(&self, expression: &str) -> Result<String, Infallible> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("{}:{expression}", self.calls.get()))
    }
}

fn call<H: TokenHandler>(handler: H, expr: &str) -> Result<String, H::Error> {
    handler.handle_token(expr)
}

#[test]
fn closure_handler() {
    let h = from_fn(|e: &str| Ok::<_, Infallible>(e.repeat(2)));
    assert_eq!(h.handle_token("ab").unwrap(), "abab");
}

#[test]
fn closure_handler_error() {
    let h = from_fn(|e: &str| Err::<String, _>(e.len()));
    assert_eq!(h.handle_token("four").unwrap_err(), 4);
}

#[test]
fn stateful_handler_through_reference() {
    let counter = Counter {
        calls: Cell::new(0),
    };
    assert_eq!(call(&counter, "a").unwrap(), "1:a");
    assert_eq!(call(&counter, "b").unwrap(), "2:b");
    assert_eq!(counter.calls.get(), 2);
}

#[test]
fn smart_pointers_forward() {
    let boxed: Box<dyn TokenHandler<Error = Infallible>> = Box::new(Counter {
        calls: Cell::new(0),
    });
    assert_eq!(call(boxed, "x").unwrap(), "1:x");

    let rc = Rc::new(Counter {
        calls: Cell::new(5),
    });
    assert_eq!(call(Rc::clone(&rc), "y").unwrap(), "6:y");
    assert_eq!(rc.calls.get(), 6);

    let arc = Arc::new(from_fn(|e: &str| Ok::<_, Infallible>(e.to_uppercase())));
    assert_eq!(call(arc, "z").unwrap(), "Z");
}

#[test]
fn fn_handler_debug_is_opaque() {
    let h = from_fn(|e: &str| Ok::<_, Infallible>(e.to_owned()));
    assert_eq!(format!("{h:?}"), "FnHandler { .. }");
}
