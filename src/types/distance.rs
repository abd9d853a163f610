//! Path lengths, including the "no path" value.

use serde::{Serialize, Serializer};

/// Length of a shortest path.
///
/// `Unreachable` plays the role of infinity and compares greater than every
/// finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Sum of edge weights along the path.
    Finite(u64),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// The finite value, if any.
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    /// True unless this is [`Distance::Unreachable`].
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}

// JSON has no infinity: unreachable serializes as null.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_u64(*d),
            Self::Unreachable => serializer.serialize_none(),
        }
    }
}
