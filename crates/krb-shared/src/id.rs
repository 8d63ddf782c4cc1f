use std::fmt::Display;

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Copy,
    Default,
)]
pub struct DbId(u64);

impl DbId {
    /// Value used by forms when nothing has been selected yet
    pub const UNSET: Self = Self(0);

    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl From<u64> for DbId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DbId> for u64 {
    fn from(value: DbId) -> Self {
        value.0
    }
}

impl std::str::FromStr for DbId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Display for DbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
