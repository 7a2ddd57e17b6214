use std::{
    any::Any,
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    sync::Once,
};
use thiserror::Error;

thread_local! {
    static QUIET: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook, once per process, so that it stays silent
/// on threads inside a quiet capture.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET.with(Cell::get) {
                hook(info)
            }
        }));
    });
}

/// A panic raised by pure logic embedded in a computation, reduced to its message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Fault {
    pub message: String,
}

impl Fault {
    /// Evaluate `thunk`, turning a panic into a [`Fault`].
    ///
    /// With `quiet` set, panics on the calling thread skip the panic hook for
    /// the duration of the call; other threads are unaffected.
    pub fn capture<A>(quiet: bool, thunk: impl FnOnce() -> A) -> Result<A, Fault> {
        if quiet {
            install_quiet_hook();
        }
        let outer = QUIET.with(|q| q.replace(q.get() || quiet));
        let res = panic::catch_unwind(AssertUnwindSafe(thunk));
        QUIET.with(|q| q.set(outer));
        res.map_err(Fault::from_payload)
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            | Ok(message) => *message,
            | Err(payload) => match payload.downcast_ref::<&'static str>() {
                | Some(message) => message.to_string(),
                | None => format!("unknown fault"),
            },
        };
        Fault { message }
    }
}

impl From<Fault> for String {
    fn from(fault: Fault) -> Self {
        fault.message
    }
}

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
