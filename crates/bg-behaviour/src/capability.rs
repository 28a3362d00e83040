//! Capability summary of a behaviour unit.

use std::fmt;

use crate::Behaviour;

/// Which lifecycle hooks a unit answers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Capabilities {
    pub start:  bool,
    pub stop:   bool,
    pub update: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities { start: false, stop: false, update: false };

    /// Query all three capabilities of `unit`.
    pub fn of<B: ?Sized, U: Behaviour<B> + ?Sized>(unit: &U) -> Self {
        Self {
            start:  unit.as_start().is_some(),
            stop:   unit.as_stop().is_some(),
            update: unit.as_update().is_some(),
        }
    }

    /// `true` for a pure marker unit.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for Capabilities {
    /// Formats as `start|stop|update`, omitting absent hooks, or `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let names = [(self.start, "start"), (self.stop, "stop"), (self.update, "update")];
        let mut first = true;
        for (_, name) in names.iter().filter(|(on, _)| *on) {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
