//! Town identity.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A named stop on the rail network.
///
/// Identity is by label: two towns with the same label are the same town.
/// Derefs to `str`, so a `&Town` can be passed anywhere a label is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Town(String);

impl Town {
    /// Create a town from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The town's label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Deref for Town {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Town {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Town {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Town {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Town {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
