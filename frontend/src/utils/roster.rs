use serde::Deserialize;
use thiserror::Error;

const TEAM_JSON: &str = include_str!("../../assets/team.json");

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Roster has no members")]
    Empty,
}

/// One team member card.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub highlight: String,
    pub badge: String,
    pub portrait: String,
}

/// Fixed, non-empty list of members. Order is rotation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { members })
    }

    pub fn from_json(raw: &str) -> Result<Self, RosterError> {
        let members: Vec<Member> = serde_json::from_str(raw)?;
        Self::new(members)
    }

    /// The roster shipped with the page.
    pub fn bundled() -> Result<Self, RosterError> {
        Self::from_json(TEAM_JSON)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_roster_loads_in_order() {
        let roster = Roster::bundled().unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.get(0).unwrap().name, "Khoi Phan");
        assert_eq!(roster.get(3).unwrap().role, "Art Director");
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(Roster::from_json("[]"), Err(RosterError::Empty)));
        assert!(matches!(Roster::new(Vec::new()), Err(RosterError::Empty)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Roster::from_json(r#"[{"name": "No Role"}]"#).unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }
}
