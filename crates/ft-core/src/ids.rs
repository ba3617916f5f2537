//! Device identifiers.
//!
//! A device id is the `"<kind>-<suffix>"` string that appears in every
//! payload (`car-123`, `drone-7`) and doubles as the ingestion partition key.
//! Wrapping it keeps ids from being confused with other strings (stream
//! names, file paths) at API boundaries.

use std::fmt;

use crate::DeviceKind;

/// The public identifier of one simulated device.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeviceId(String);

impl DeviceId {
    /// Use `id` verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Prefix `suffix` with the kind label: `for_kind(Car, "123")` → `car-123`.
    pub fn for_kind(kind: DeviceKind, suffix: impl fmt::Display) -> Self {
        Self(format!("{}-{}", kind.as_str(), suffix))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
