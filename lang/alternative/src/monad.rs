//! Sequencing. Every combinator here stops at the first failure and keeps
//! that failure alone; only alternation merges errors.

use crate::alternative::Alternative;
use recourse_state::State;

pub fn inject<'a, U: 'a, E: Clone + 'a, A: Clone + 'a>(value: A) -> Alternative<'a, U, E, A> {
    Alternative::from_state(State::pure(Ok(value)))
}

/// Run `comp`, then `f` on its value. A failure is propagated untouched
/// whatever the abort flag says.
pub fn bind<'a, U: 'a, E: Clone + 'a, A: 'a, B: 'a>(
    comp: Alternative<'a, U, E, A>, f: impl Fn(A) -> Alternative<'a, U, E, B> + 'a,
) -> Alternative<'a, U, E, B> {
    Alternative::from_state(comp.into_state().bind(move |res| match res {
        | Ok(value) => f(value).into_state(),
        | Err(tree) => Alternative::failed(tree).into_state(),
    }))
}

pub fn fmap<'a, U: 'a, E: Clone + 'a, A: 'a, B: 'a>(
    comp: Alternative<'a, U, E, A>, f: impl Fn(A) -> B + 'a,
) -> Alternative<'a, U, E, B> {
    Alternative::from_state(comp.into_state().map(move |res| res.map(&f)))
}

/// Left to right: the function is produced before its argument.
pub fn apply<'a, U: 'a, E: Clone + 'a, F, A: 'a, B: 'a>(
    func: Alternative<'a, U, E, F>, arg: Alternative<'a, U, E, A>,
) -> Alternative<'a, U, E, B>
where
    F: Fn(A) -> B + 'a,
{
    bind(func, move |f| fmap(arg.clone(), f))
}

pub fn then<'a, U: 'a, E: Clone + 'a, A: 'a, B: 'a>(
    comp: Alternative<'a, U, E, A>, next: Alternative<'a, U, E, B>,
) -> Alternative<'a, U, E, B> {
    bind(comp, move |_| next.clone())
}

/// Run every computation in order, collecting their values.
///
/// The first failure ends the run; the state is left as that element
/// left it.
pub fn sequence<'a, U: 'a, E: Clone + 'a, A: 'a>(
    comps: impl IntoIterator<Item = Alternative<'a, U, E, A>>,
) -> Alternative<'a, U, E, Vec<A>> {
    let comps: Vec<_> = comps.into_iter().collect();
    Alternative::new(move |mut state| {
        let mut values = Vec::with_capacity(comps.len());
        for comp in &comps {
            let (res, next) = comp.run_flagged(state);
            state = next;
            match res {
                | Ok(value) => values.push(value),
                | Err(tree) => return (Err(tree), state),
            }
        }
        (Ok(values), state)
    })
}
