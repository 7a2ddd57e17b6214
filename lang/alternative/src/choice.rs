//! Backtracking alternation.

use crate::alternative::{Alternative, Flagged};

/// Try `first`; if it fails without aborting, roll the state back and try
/// `second`.
///
/// When both fail the result is `first`'s tree with `second`'s tree pushed
/// as its last child. When `first` fails with the abort flag set, `second`
/// never runs and neither the state nor the tree is touched.
pub fn alt_or<'a, U: Clone + 'a, E: Clone + 'a, A: 'a>(
    first: Alternative<'a, U, E, A>, second: Alternative<'a, U, E, A>,
) -> Alternative<'a, U, E, A> {
    Alternative::new(move |state: Flagged<U>| {
        let snapshot = state.clone();
        match first.run_flagged(state) {
            | (Ok(value), state) => (Ok(value), state),
            | (Err(tree), state @ (_, true)) => {
                log::debug!("alternative aborted; skipping the remaining branch");
                (Err(tree), state)
            }
            | (Err(first_tree), _) => {
                log::trace!("alternative failed; backtracking");
                match second.run_flagged(snapshot) {
                    | (Ok(value), state) => (Ok(value), state),
                    | (Err(second_tree), state) => (Err(first_tree.appended(second_tree)), state),
                }
            }
        }
    })
}

/// [`alt_or`] for right-nested chains, `a.or_right_assoc(b.or_right_assoc(c))`.
///
/// The leftmost success wins. When every branch fails, each later failure
/// hangs below the one tried before it: `a [b [c]]`.
pub fn alt_or_right_assoc<'a, U: Clone + 'a, E: Clone + 'a, A: 'a>(
    first: Alternative<'a, U, E, A>, rest: Alternative<'a, U, E, A>,
) -> Alternative<'a, U, E, A> {
    alt_or(first, rest)
}

/// Left fold of [`alt_or`]: when all fail, the failures of `rest` become
/// flat children of `first`'s tree, in order.
pub fn choice<'a, U: Clone + 'a, E: Clone + 'a, A: 'a>(
    first: Alternative<'a, U, E, A>, rest: impl IntoIterator<Item = Alternative<'a, U, E, A>>,
) -> Alternative<'a, U, E, A> {
    rest.into_iter().fold(first, alt_or)
}
