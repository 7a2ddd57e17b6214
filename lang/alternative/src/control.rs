//! Failure construction, fault bridging and access to the user state.
//!
//! The abort flag is never visible here: [`get`], [`put`] and [`modify`]
//! see only the user half of the state.

use crate::{
    alternative::{Alternative, Flagged},
    conf::Conf,
    err::Fault,
    monad::inject,
    tree::ErrorTree,
};
use recourse_state::State;

/// A recoverable failure: enclosing alternations may backtrack over it.
pub fn error<'a, U: 'a, E: Clone + 'a, A: 'a>(value: E) -> Alternative<'a, U, E, A> {
    Alternative::new(move |state| (Err(ErrorTree::leaf(value.clone())), state))
}

/// An unrecoverable failure: sets the abort flag, then fails with `value`.
///
/// From here on every enclosing alternation in the same run propagates the
/// failure instead of trying its right branch.
pub fn abort<'a, U: 'a, E: Clone + 'a, A: 'a>(value: E) -> Alternative<'a, U, E, A> {
    let raise = State::modify(|(user, _): Flagged<U>| {
        log::debug!("abort flag set");
        (user, true)
    });
    Alternative::from_state(raise.then(error(value).into_state()))
}

/// Lift a plain result; `Err` becomes a recoverable leaf.
pub fn lift<'a, U: 'a, E: Clone + 'a, A: Clone + 'a>(
    result: Result<A, E>,
) -> Alternative<'a, U, E, A> {
    match result {
        | Ok(value) => inject(value),
        | Err(value) => error(value),
    }
}

/// Evaluate `thunk` each time the computation runs, reporting a panic as a
/// recoverable leaf carrying the panic message.
pub fn catch<'a, U: 'a, E, A: 'a>(thunk: impl Fn() -> A + 'a) -> Alternative<'a, U, E, A>
where
    E: From<Fault> + Clone + 'a,
{
    catch_with(&Conf::default(), thunk)
}

pub fn catch_with<'a, U: 'a, E, A: 'a>(
    conf: &Conf, thunk: impl Fn() -> A + 'a,
) -> Alternative<'a, U, E, A>
where
    E: From<Fault> + Clone + 'a,
{
    let quiet = conf.quiet_faults;
    Alternative::new(move |state| match Fault::capture(quiet, &thunk) {
        | Ok(value) => (Ok(value), state),
        | Err(fault) => {
            log::debug!("caught fault: {}", fault);
            (Err(ErrorTree::leaf(E::from(fault))), state)
        }
    })
}

/// Build the computation only when it runs; needed for recursive rules.
pub fn defer<'a, U: 'a, E: Clone + 'a, A: 'a>(
    thunk: impl Fn() -> Alternative<'a, U, E, A> + 'a,
) -> Alternative<'a, U, E, A> {
    Alternative::from_state(State::defer(move || thunk().into_state()))
}

/* ------------------------------- User State ------------------------------- */

pub fn get<'a, U: Clone + 'a, E: Clone + 'a>() -> Alternative<'a, U, E, U> {
    gets(U::clone)
}

pub fn gets<'a, U: 'a, E: Clone + 'a, A: 'a>(
    f: impl Fn(&U) -> A + 'a,
) -> Alternative<'a, U, E, A> {
    Alternative::from_state(State::gets(move |(user, _): &Flagged<U>| Ok(f(user))))
}

pub fn put<'a, U: Clone + 'a, E: Clone + 'a>(user: U) -> Alternative<'a, U, E, ()> {
    Alternative::from_state(
        State::modify(move |(_, aborted): Flagged<U>| (user.clone(), aborted)).map(|()| Ok(())),
    )
}

pub fn modify<'a, U: 'a, E: Clone + 'a>(
    f: impl Fn(U) -> U + 'a,
) -> Alternative<'a, U, E, ()> {
    Alternative::from_state(
        State::modify(move |(user, aborted): Flagged<U>| (f(user), aborted)).map(|()| Ok(())),
    )
}
