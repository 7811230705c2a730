//! Deferred, call-once memoized values
//!
//! A [`LazyValue`] stands in for a value whose computation may be expensive
//! (typically a view render) and that the caller may discard unused. Forcing
//! runs the computation at most once; the outcome (value or error) is cached
//! so repeated forcing is idempotent.
//!
//! Instances are `Rc`-shared and deliberately not thread-safe: evaluation is
//! single-threaded per context, and hosts evaluating from several threads must
//! give each thread its own context.

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::model::value::PathValue;

type Thunk = Box<dyn FnOnce() -> Result<PathValue>>;

/// A deferred computation standing in for a not-yet-computed value
#[derive(Clone)]
pub struct LazyValue {
    inner: Rc<LazyInner>,
}

struct LazyInner {
    outcome: OnceCell<Result<PathValue>>,
    thunk: RefCell<Option<Thunk>>,
}

impl LazyValue {
    /// Create a lazy value from a zero-argument computation
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<PathValue> + 'static,
    {
        Self {
            inner: Rc::new(LazyInner {
                outcome: OnceCell::new(),
                thunk: RefCell::new(Some(Box::new(thunk))),
            }),
        }
    }

    /// Wrap an already-computed value
    pub fn ready(value: PathValue) -> Self {
        let outcome = OnceCell::new();
        let _ = outcome.set(Ok(value));
        Self {
            inner: Rc::new(LazyInner {
                outcome,
                thunk: RefCell::new(None),
            }),
        }
    }

    /// Force the computation, caching its outcome
    pub fn force(&self) -> Result<PathValue> {
        if let Some(done) = self.inner.outcome.get() {
            return done.clone();
        }
        let thunk = self.inner.thunk.borrow_mut().take();
        let outcome = match thunk {
            Some(run) => run(),
            // A cycle forced this value while its own thunk was running
            None => Ok(PathValue::Null),
        };
        self.inner.outcome.get_or_init(|| outcome).clone()
    }

    /// Whether the computation already ran
    pub fn is_forced(&self) -> bool {
        self.inner.outcome.get().is_some()
    }

    /// Cached value if already forced; never runs the computation
    pub fn peek(&self) -> Option<PathValue> {
        match self.inner.outcome.get() {
            Some(Ok(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Whether two handles share the same underlying computation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LazyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.outcome.get() {
            Some(Ok(value)) => write!(f, "LazyValue(forced: {value:?})"),
            Some(Err(error)) => write!(f, "LazyValue(failed: {error})"),
            None => write!(f, "LazyValue(pending)"),
        }
    }
}
