//! Navigation selection and its address-bar encoding.
//! 导航选择及其地址栏编码。

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::ids::SnapshotId;

/// Query key under which the selection is persisted.
pub const VIEWING_SNAPSHOT_KEY: &str = "viewing-snapshot";

/// The unit of navigation: one snapshot, or an ordered pair for an overlay view.
///
/// In a pair the first id is the base the second one is folded onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Single(SnapshotId),
    Pair(SnapshotId, SnapshotId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionParseError {
    #[error("query has no `{VIEWING_SNAPSHOT_KEY}` entry")]
    Missing,

    #[error("selection is empty")]
    Empty,

    #[error("invalid snapshot id: {0:?}")]
    InvalidId(String),

    #[error("selection holds {0} ids, at most 2 are supported")]
    TooManyIds(usize),
}

impl Selection {
    /// The base snapshot: the only one, or the first of a pair.
    pub fn base(&self) -> SnapshotId {
        match self {
            Self::Single(id) | Self::Pair(id, _) => *id,
        }
    }

    /// Full query string, e.g. `?viewing-snapshot=3,7`.
    pub fn to_query(&self) -> String {
        format!("?{}={}", VIEWING_SNAPSHOT_KEY, self)
    }

    /// Parse a query string (leading `?` optional). Unrelated keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, SelectionParseError> {
        let query = query.trim().trim_start_matches('?');
        let value = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == VIEWING_SNAPSHOT_KEY)
            .map(|(_, value)| value)
            .ok_or(SelectionParseError::Missing)?;

        let selection = value.parse();
        #[cfg(feature = "tracing")]
        if let Err(err) = &selection {
            tracing::debug!(query, error = %err, "Rejected persisted selection");
        }
        selection
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(id) => write!(f, "{}", id),
            Self::Pair(a, b) => write!(f, "{},{}", a, b),
        }
    }
}

impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `%2C` is what an address bar turns a comma into.
        let normalized = s.trim().replace("%2C", ",").replace("%2c", ",");
        if normalized.is_empty() {
            return Err(SelectionParseError::Empty);
        }

        let ids = normalized
            .split(',')
            .map(|part| {
                part.parse::<SnapshotId>()
                    .map_err(|_| SelectionParseError::InvalidId(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match ids.as_slice() {
            [id] => Ok(Self::Single(*id)),
            [a, b] => Ok(Self::Pair(*a, *b)),
            _ => Err(SelectionParseError::TooManyIds(ids.len())),
        }
    }
}

impl From<SnapshotId> for Selection {
    fn from(id: SnapshotId) -> Self {
        Self::Single(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> SnapshotId {
        SnapshotId::new(n)
    }

    #[test]
    fn test_single_selection_query() {
        let selection = Selection::Single(id(5));
        assert_eq!(selection.to_query(), "?viewing-snapshot=5");
        assert_eq!(Selection::from_query("?viewing-snapshot=5"), Ok(selection));
    }

    #[test]
    fn test_pair_selection_query_keeps_order() {
        let selection = Selection::Pair(id(7), id(3));
        assert_eq!(selection.to_query(), "?viewing-snapshot=7,3");
        assert_eq!(Selection::from_query("viewing-snapshot=7,3"), Ok(selection));
        assert_eq!(selection.base(), id(7));
    }

    #[test]
    fn test_from_query_ignores_other_keys() {
        assert_eq!(
            Selection::from_query("?lang=en&viewing-snapshot=3%2C7"),
            Ok(Selection::Pair(id(3), id(7)))
        );
    }

    #[test]
    fn test_from_query_rejects_bad_input() {
        assert_eq!(
            Selection::from_query("?lang=en"),
            Err(SelectionParseError::Missing)
        );
        assert_eq!(
            Selection::from_query("?viewing-snapshot="),
            Err(SelectionParseError::Empty)
        );
        assert_eq!(
            Selection::from_query("?viewing-snapshot=abc"),
            Err(SelectionParseError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            Selection::from_query("?viewing-snapshot=1,2,3"),
            Err(SelectionParseError::TooManyIds(3))
        );
    }
}
