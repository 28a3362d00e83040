//! A marker unit with no capabilities.

use crate::Behaviour;

/// A [`Behaviour`] that answers to no lifecycle hook.
///
/// Useful as a placeholder in tests, or as a tag member whose presence in a
/// group is itself the information.
#[derive(Debug, Default)]
pub struct NoopBehaviour;

impl<B: ?Sized> Behaviour<B> for NoopBehaviour {
    fn label(&self) -> &str {
        "noop"
    }
}
