//! Cadence tiers and the tag sets that bind them to snapshots.
//!
//! A [`Cadence`] is one of the three fixed backup frequencies. A
//! [`TagSet`] is the set of cadences currently claiming one physical
//! snapshot; the snapshot lives exactly as long as this set is non-empty.
//! The external store represents a tag set as a single space-joined
//! string value, so conversion happens only at the store boundary via
//! [`TagSet::to_tag_value`] and [`TagSet::parse_tag_value`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// One of the three fixed backup cadences.
///
/// The derived `Ord` follows declaration order, which is also the fixed
/// order in which the orchestrator evaluates tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cadence {
    Yearly,
    Monthly,
    Weekly,
}

impl Cadence {
    /// All cadences in evaluation order: yearly, monthly, weekly.
    pub const ALL: [Cadence; 3] = [Cadence::Yearly, Cadence::Monthly, Cadence::Weekly];

    /// The lowercase tier name used in tag values and configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Yearly => "yearly",
            Cadence::Monthly => "monthly",
            Cadence::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yearly" => Ok(Cadence::Yearly),
            "monthly" => Ok(Cadence::Monthly),
            "weekly" => Ok(Cadence::Weekly),
            other => Err(DomainError::UnknownCadence {
                name: other.to_string(),
            }),
        }
    }
}

/// The set of cadences attached to one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<Cadence>);

impl TagSet {
    /// Create an empty tag set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a cadence to the set.
    pub fn insert(&mut self, cadence: Cadence) {
        self.0.insert(cadence);
    }

    /// Remove a cadence from the set. Returns whether it was present.
    pub fn remove(&mut self, cadence: Cadence) -> bool {
        self.0.remove(&cadence)
    }

    /// Whether the set contains the given cadence.
    #[must_use]
    pub fn contains(&self, cadence: Cadence) -> bool {
        self.0.contains(&cadence)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate cadences in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = Cadence> + '_ {
        self.0.iter().copied()
    }

    /// Serialize to the store's tag value format: space-joined tier names.
    #[must_use]
    pub fn to_tag_value(&self) -> String {
        let names: Vec<&str> = self.0.iter().map(Cadence::as_str).collect();
        names.join(" ")
    }

    /// Parse a stored tag value back into a tag set.
    ///
    /// Every whitespace-separated token must be a known tier name. An
    /// unknown token is an error rather than a skip: dropping it would
    /// let a later detag delete a snapshot some other tool still claims.
    pub fn parse_tag_value(value: &str) -> Result<Self, DomainError> {
        value.split_whitespace().map(Cadence::from_str).collect()
    }
}

impl FromIterator<Cadence> for TagSet {
    fn from_iter<I: IntoIterator<Item = Cadence>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tag_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_round_trips_through_str() {
        for cadence in Cadence::ALL {
            assert_eq!(cadence.as_str().parse::<Cadence>().unwrap(), cadence);
        }
    }

    #[test]
    fn unknown_cadence_is_an_error() {
        let err = "hourly".parse::<Cadence>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownCadence { name } if name == "hourly"));
    }

    #[test]
    fn tag_value_round_trip_preserves_order() {
        let tags: TagSet = [Cadence::Weekly, Cadence::Yearly].into_iter().collect();
        assert_eq!(tags.to_tag_value(), "yearly weekly");
        assert_eq!(TagSet::parse_tag_value("yearly weekly").unwrap(), tags);
        // insertion order does not matter
        assert_eq!(TagSet::parse_tag_value("weekly yearly").unwrap(), tags);
    }

    #[test]
    fn parse_rejects_foreign_tokens() {
        assert!(TagSet::parse_tag_value("weekly hourly").is_err());
    }

    #[test]
    fn remove_reports_presence() {
        let mut tags: TagSet = [Cadence::Monthly].into_iter().collect();
        assert!(tags.remove(Cadence::Monthly));
        assert!(!tags.remove(Cadence::Monthly));
        assert!(tags.is_empty());
    }
}
