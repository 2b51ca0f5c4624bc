//! Participant and roster models
//!
//! The roster is the fixed, ordered set of people on the trip. It is
//! configured externally and is authoritative: every payer and sharer of an
//! expense must be a member.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::ParticipantId;

/// A trip participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable key used in expense records
    pub id: ParticipantId,

    /// Display name
    pub name: String,
}

impl Participant {
    /// Create a new participant
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into().trim().to_string(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Ordered, validated set of participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Build a roster, rejecting empty rosters, blank fields and duplicate ids
    pub fn new(participants: Vec<Participant>) -> Result<Self, RosterValidationError> {
        if participants.is_empty() {
            return Err(RosterValidationError::Empty);
        }

        let mut seen = HashSet::new();
        for participant in &participants {
            if participant.id.is_empty() {
                return Err(RosterValidationError::EmptyId);
            }
            if participant.name.is_empty() {
                return Err(RosterValidationError::EmptyName(participant.id.clone()));
            }
            if !seen.insert(participant.id.clone()) {
                return Err(RosterValidationError::DuplicateId(participant.id.clone()));
            }
        }

        Ok(Self { participants })
    }

    /// Check whether an id belongs to the roster
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.position(id).is_some()
    }

    /// Index of a participant in roster order
    pub fn position(&self, id: &ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| &p.id == id)
    }

    /// Look up a participant by id
    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Display name for an id, falling back to the raw id
    pub fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or(id.as_str())
    }

    /// Participant ids in roster order
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }

    /// Iterate participants in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Consume the roster, returning its participants
    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

/// Validation errors for rosters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterValidationError {
    Empty,
    EmptyId,
    EmptyName(ParticipantId),
    DuplicateId(ParticipantId),
}

impl fmt::Display for RosterValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Roster must contain at least one participant"),
            Self::EmptyId => write!(f, "Participant id cannot be empty"),
            Self::EmptyName(id) => write!(f, "Participant '{}' has no display name", id),
            Self::DuplicateId(id) => write!(f, "Participant id '{}' appears more than once", id),
        }
    }
}

impl std::error::Error for RosterValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Roster {
        Roster::new(vec![
            Participant::new("A", "Andy"),
            Participant::new("B", "Coco"),
            Participant::new("C", "Pei"),
        ])
        .unwrap()
    }

    #[test]
    fn test_roster_lookup() {
        let roster = abc();
        assert_eq!(roster.len(), 3);
        assert!(roster.contains(&"B".into()));
        assert!(!roster.contains(&"Z".into()));
        assert_eq!(roster.position(&"C".into()), Some(2));
        assert_eq!(roster.display_name(&"A".into()), "Andy");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let roster = abc();
        let unknown = ParticipantId::new("Z");
        assert_eq!(roster.display_name(&unknown), "Z");
    }

    #[test]
    fn test_roster_keeps_order() {
        let ids: Vec<String> = abc().ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_roster_rejects_invalid() {
        assert_eq!(Roster::new(vec![]), Err(RosterValidationError::Empty));

        assert_eq!(
            Roster::new(vec![Participant::new(" ", "Nobody")]),
            Err(RosterValidationError::EmptyId)
        );

        assert_eq!(
            Roster::new(vec![Participant::new("A", "  ")]),
            Err(RosterValidationError::EmptyName("A".into()))
        );

        assert_eq!(
            Roster::new(vec![
                Participant::new("A", "Andy"),
                Participant::new("A", "Again"),
            ]),
            Err(RosterValidationError::DuplicateId("A".into()))
        );
    }
}
