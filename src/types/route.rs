//! Query results: route distances and materialized trips.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Town;

/// Literal rendering of [`RouteDistance::NoSuchRoute`].
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// The distance of a route, or the fact that the route does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteDistance {
    /// Total distance travelled.
    Distance(u64),
    /// The requested walk has a missing segment, or no walk connects the endpoints.
    NoSuchRoute,
}

impl RouteDistance {
    /// The numeric distance, if the route exists.
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Distance(d) => Some(*d),
            Self::NoSuchRoute => None,
        }
    }

    /// True if the route exists.
    pub fn is_route(&self) -> bool {
        matches!(self, Self::Distance(_))
    }
}

impl From<Option<u64>> for RouteDistance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::NoSuchRoute, Self::Distance)
    }
}

impl fmt::Display for RouteDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(d) => write!(f, "{}", d),
            Self::NoSuchRoute => f.write_str(NO_SUCH_ROUTE),
        }
    }
}

impl Serialize for RouteDistance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Distance(d) => serializer.serialize_u64(*d),
            Self::NoSuchRoute => serializer.serialize_str(NO_SUCH_ROUTE),
        }
    }
}

/// A concrete walk through the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    /// Towns visited in order, including both endpoints.
    pub towns: Vec<Town>,
    /// Sum of the segment weights along the walk.
    pub distance: u64,
}

impl Trip {
    /// Number of segments travelled.
    pub fn stops(&self) -> usize {
        self.towns.len().saturating_sub(1)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, town) in self.towns.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", town)?;
        }
        Ok(())
    }
}
