//! Backtracking computations with hierarchical failures.
//!
//! An [`Alternative`] threads a caller-owned state through a chain of steps
//! and ends in either a value or an [`ErrorTree`]. Alternation
//! ([`alt_or`], `|`) rolls the state back before trying its right branch,
//! unless the left branch raised the abort flag through [`abort`].

#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod tree;
pub mod alternative;
pub mod monad;
pub mod choice;
pub mod control;

pub mod conf;
pub mod err;
pub mod fmt;

pub use alternative::{Alternative, Flagged, Outcome};
pub use choice::{alt_or, alt_or_right_assoc, choice};
pub use conf::Conf;
pub use control::{abort, catch, catch_with, defer, error, get, gets, lift, modify, put};
pub use err::{ConfError, Fault};
pub use monad::{apply, bind, fmap, inject, sequence, then};
pub use tree::ErrorTree;

pub mod prelude {
    pub use crate::{
        alternative::{Alternative, Flagged, Outcome},
        choice::*,
        conf::Conf,
        control::*,
        err::Fault,
        fmt::{Formatter, Pretty, Ugly},
        monad::*,
        tree::ErrorTree,
    };
}
