use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Name of a narrative flag. Flags are declared by game content as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlagKey(pub &'static str);

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Session-scoped decision record. Every flag starts unset and, once set,
/// stays set for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NarrativeFlags {
    set: BTreeSet<FlagKey>,
}

impl NarrativeFlags {
    pub fn is_set(&self, flag: FlagKey) -> bool {
        self.set.contains(&flag)
    }

    /// Returns `true` when the flag was not already set.
    pub fn set(&mut self, flag: FlagKey) -> bool {
        self.set.insert(flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = FlagKey> + '_ {
        self.set.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
