//! Deferred state-passing computations.
//!
//! A [`State<'a, S, A>`] describes a computation that, given a state `S`,
//! produces a value `A` together with the next state. Building one is free:
//! nothing happens until [`State::run`] is called against an initial state,
//! and the same value may be run any number of times.

use std::rc::Rc;

/// A deferred computation from `S` to `(A, S)`.
pub struct State<'a, S, A> {
    step: Rc<dyn Fn(S) -> (A, S) + 'a>,
}

impl<'a, S, A> Clone for State<'a, S, A> {
    fn clone(&self) -> Self {
        State { step: self.step.clone() }
    }
}

impl<'a, S: 'a, A: 'a> State<'a, S, A> {
    pub fn new(step: impl Fn(S) -> (A, S) + 'a) -> Self {
        State { step: Rc::new(step) }
    }
    /// Produce `a` without touching the state.
    pub fn pure(a: A) -> Self
    where
        A: Clone,
    {
        State::new(move |s| (a.clone(), s))
    }
    /// Read a projection of the state.
    pub fn gets(f: impl Fn(&S) -> A + 'a) -> Self {
        State::new(move |s| (f(&s), s))
    }
    /// Build the computation only when it is run.
    ///
    /// Recursive definitions go through here so that constructing them
    /// terminates.
    pub fn defer(thunk: impl Fn() -> State<'a, S, A> + 'a) -> Self {
        State::new(move |s| thunk().run(s))
    }

    pub fn run(&self, s: S) -> (A, S) {
        (self.step)(s)
    }
    pub fn eval(&self, s: S) -> A {
        self.run(s).0
    }
    pub fn exec(&self, s: S) -> S {
        self.run(s).1
    }

    pub fn bind<B: 'a>(self, f: impl Fn(A) -> State<'a, S, B> + 'a) -> State<'a, S, B> {
        State::new(move |s| {
            let (a, s) = self.run(s);
            f(a).run(s)
        })
    }
    pub fn map<B: 'a>(self, f: impl Fn(A) -> B + 'a) -> State<'a, S, B> {
        State::new(move |s| {
            let (a, s) = self.run(s);
            (f(a), s)
        })
    }
    /// Run `self`, drop its value, then run `next`.
    pub fn then<B: 'a>(self, next: State<'a, S, B>) -> State<'a, S, B> {
        State::new(move |s| {
            let (_, s) = self.run(s);
            next.run(s)
        })
    }
}

impl<'a, S: Clone + 'a> State<'a, S, S> {
    pub fn get() -> Self {
        State::new(|s: S| (s.clone(), s))
    }
}

impl<'a, S: 'a> State<'a, S, ()> {
    pub fn put(s: S) -> Self
    where
        S: Clone,
    {
        State::new(move |_| ((), s.clone()))
    }
    pub fn modify(f: impl Fn(S) -> S + 'a) -> Self {
        State::new(move |s| ((), f(s)))
    }
}
