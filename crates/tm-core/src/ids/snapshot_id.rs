use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Snapshot identifier assigned by the backend.
/// 后端分配的快照 ID。
///
/// Ids are immutable keys: the same id always refers to the same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(u64);

impl SnapshotId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for SnapshotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SnapshotId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for SnapshotId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot_id() {
        assert_eq!("42".parse::<SnapshotId>().unwrap(), SnapshotId::new(42));
        assert_eq!(" 7 ".parse::<SnapshotId>().unwrap(), SnapshotId::new(7));
        assert!("abc".parse::<SnapshotId>().is_err());
        assert!("-1".parse::<SnapshotId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: SnapshotId = serde_json::from_str("5").unwrap();
        assert_eq!(id, SnapshotId::new(5));
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
