use crate::{choice, monad, tree::ErrorTree};
use recourse_state::State;
use std::ops::BitOr;

/// User state paired with the abort flag.
pub type Flagged<U> = (U, bool);
/// Success value or the failures recorded on the way.
pub type Outcome<E, A> = Result<A, ErrorTree<E>>;

/// A deferred, backtrackable computation over user state `U`.
///
/// Running it from `(u, false)` yields an [`Outcome`] and the final flagged
/// state. Failures never escape as panics once they pass through
/// [`catch`](crate::control::catch); they are reported as an [`ErrorTree`].
///
/// Only this crate can wrap a raw [`State`]: the abort flag is written by
/// [`abort`](crate::control::abort) alone and never lowered.
pub struct Alternative<'a, U, E: Clone, A>(pub(crate) State<'a, Flagged<U>, Outcome<E, A>>);

impl<'a, U, E: Clone, A> Clone for Alternative<'a, U, E, A> {
    fn clone(&self) -> Self {
        Alternative(self.0.clone())
    }
}

impl<'a, U: 'a, E: Clone + 'a, A: 'a> Alternative<'a, U, E, A> {
    pub(crate) fn new(
        step: impl Fn(Flagged<U>) -> (Outcome<E, A>, Flagged<U>) + 'a,
    ) -> Self {
        Alternative(State::new(step))
    }
    pub(crate) fn from_state(state: State<'a, Flagged<U>, Outcome<E, A>>) -> Self {
        Alternative(state)
    }
    pub(crate) fn failed(tree: ErrorTree<E>) -> Self {
        Alternative::new(move |state| (Err(tree.clone()), state))
    }

    /// Run from a fresh, backtrackable state.
    pub fn run(&self, user: U) -> (Outcome<E, A>, Flagged<U>) {
        self.run_flagged((user, false))
    }
    /// Resume from a state that already carries an abort flag, such as the
    /// final state of an earlier run. A set flag disables every alternation
    /// in this run.
    pub fn run_flagged(&self, state: Flagged<U>) -> (Outcome<E, A>, Flagged<U>) {
        self.0.run(state)
    }
    pub fn into_state(self) -> State<'a, Flagged<U>, Outcome<E, A>> {
        self.0
    }

    pub fn bind<B: 'a>(
        self, f: impl Fn(A) -> Alternative<'a, U, E, B> + 'a,
    ) -> Alternative<'a, U, E, B> {
        monad::bind(self, f)
    }
    pub fn map<B: 'a>(self, f: impl Fn(A) -> B + 'a) -> Alternative<'a, U, E, B> {
        monad::fmap(self, f)
    }
    /// Apply the produced function to the value of `arg`, running `self` first.
    pub fn apply<X: 'a, B: 'a>(self, arg: Alternative<'a, U, E, X>) -> Alternative<'a, U, E, B>
    where
        A: Fn(X) -> B,
    {
        monad::apply(self, arg)
    }
    pub fn then<B: 'a>(self, next: Alternative<'a, U, E, B>) -> Alternative<'a, U, E, B> {
        monad::then(self, next)
    }

    pub fn or(self, other: Self) -> Self
    where
        U: Clone,
    {
        choice::alt_or(self, other)
    }
    pub fn or_right_assoc(self, other: Self) -> Self
    where
        U: Clone,
    {
        choice::alt_or_right_assoc(self, other)
    }
}

impl<'a, U: Clone + 'a, E: Clone + 'a, A: 'a> BitOr for Alternative<'a, U, E, A> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        choice::alt_or(self, rhs)
    }
}
