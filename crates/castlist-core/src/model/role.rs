use serde::{Deserialize, Serialize};

use super::audition::Audition;
use crate::errors::{CastingError, Result};

/// Role - a castable character
///
/// A Role owns the auditions held for it. The `auditions` collection is
/// ordered by storage order (ascending audition id once hydrated), and that
/// order decides who is lead and who is understudy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Storage-generated primary key (None until first persisted)
    pub id: Option<i64>,

    /// Name of the character being cast
    pub character_name: String,

    /// Auditions for this role, in storage order
    pub auditions: Vec<Audition>,
}

impl Role {
    /// Create a new, unpersisted Role with no auditions
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            id: None,
            character_name: character_name.into(),
            auditions: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Append an audition to this role's collection
    ///
    /// # Errors
    /// * `AuditionRoleMismatch` - if the audition's `role_id` is not this role's id
    pub fn add_audition(&mut self, audition: Audition) -> Result<()> {
        if audition.role_id != self.id {
            return Err(CastingError::AuditionRoleMismatch {
                audition_id: audition.id,
                audition_role_id: audition.role_id,
                role_id: self.id,
            });
        }
        self.auditions.push(audition);
        Ok(())
    }

    /// Actor names across all auditions, in collection order
    pub fn actors(&self) -> Vec<&str> {
        self.auditions.iter().map(|a| a.actor.as_str()).collect()
    }

    /// Audition locations across all auditions, in collection order
    pub fn locations(&self) -> Vec<&str> {
        self.auditions.iter().map(|a| a.location.as_str()).collect()
    }

    /// Hired auditions, in collection order
    pub fn hired(&self) -> impl Iterator<Item = &Audition> {
        self.auditions.iter().filter(|a| a.hired)
    }

    /// The first hired audition, if any
    pub fn lead(&self) -> Option<&Audition> {
        self.hired().next()
    }

    /// The second hired audition, if any
    ///
    /// The lead is never the understudy: with a single hire this returns
    /// `None`. Whether the understudy should instead be "the next hire after
    /// the lead" is an open product question; the second hire is kept.
    pub fn understudy(&self) -> Option<&Audition> {
        self.hired().nth(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_role(id: i64, name: &str) -> Role {
        let mut role = Role::new(name);
        role.id = Some(id);
        role
    }

    fn audition(id: i64, actor: &str, location: &str, hired: bool) -> Audition {
        let mut audition = Audition::new(actor, location, 254700000000 + id, 1);
        audition.id = Some(id);
        audition.hired = hired;
        audition
    }

    #[test]
    fn test_new_role() {
        let role = Role::new("Hamlet");

        assert_eq!(role.character_name, "Hamlet");
        assert!(role.auditions.is_empty());
        assert!(!role.is_persisted());
    }

    #[test]
    fn test_empty_role_queries() {
        let role = persisted_role(1, "Hamlet");

        assert!(role.actors().is_empty());
        assert!(role.locations().is_empty());
        assert!(role.lead().is_none());
        assert!(role.understudy().is_none());
    }

    #[test]
    fn test_actors_and_locations_keep_order_and_duplicates() {
        let mut role = persisted_role(1, "Ophelia");
        role.add_audition(audition(1, "amina", "Mombasa", false)).unwrap();
        role.add_audition(audition(2, "brian", "Nairobi", false)).unwrap();
        role.add_audition(audition(3, "amina", "Nairobi", false)).unwrap();

        assert_eq!(role.actors(), vec!["amina", "brian", "amina"]);
        assert_eq!(role.locations(), vec!["Mombasa", "Nairobi", "Nairobi"]);
    }

    #[test]
    fn test_single_hire_is_lead_without_understudy() {
        let mut role = persisted_role(1, "Hamlet");
        role.add_audition(audition(1, "a", "x", false)).unwrap();
        role.add_audition(audition(2, "b", "y", true)).unwrap();
        role.add_audition(audition(3, "c", "z", false)).unwrap();

        assert_eq!(role.lead().and_then(|a| a.id), Some(2));
        assert!(role.understudy().is_none());
    }

    #[test]
    fn test_understudy_is_second_hire_not_second_audition() {
        let mut role = persisted_role(1, "Hamlet");
        role.add_audition(audition(1, "a1", "x", true)).unwrap();
        role.add_audition(audition(2, "a2", "y", false)).unwrap();
        role.add_audition(audition(3, "a3", "z", true)).unwrap();

        assert_eq!(role.lead().map(|a| a.actor.as_str()), Some("a1"));
        assert_eq!(role.understudy().map(|a| a.actor.as_str()), Some("a3"));
    }

    #[test]
    fn test_add_audition_rejects_other_role() {
        let mut role = persisted_role(1, "Hamlet");
        let mut stray = audition(9, "stray", "x", false);
        stray.role_id = Some(2);

        let err = role.add_audition(stray).unwrap_err();

        assert!(matches!(
            err,
            CastingError::AuditionRoleMismatch {
                audition_role_id: Some(2),
                role_id: Some(1),
                ..
            }
        ));
        assert!(role.auditions.is_empty());
    }

    #[test]
    fn test_add_audition_rejects_unlinked() {
        let mut role = persisted_role(1, "Hamlet");
        let mut unlinked = audition(9, "nobody", "x", false);
        unlinked.role_id = None;

        assert!(role.add_audition(unlinked).is_err());
    }
}
