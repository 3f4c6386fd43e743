use serde::{Deserialize, Serialize};

/// Audition - a single actor's tryout for one role
///
/// `id` is `None` until the record is first persisted; storage assigns it.
/// `role_id` is the many-side of the Role → Audition relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audition {
    /// Storage-generated primary key
    pub id: Option<i64>,

    /// Performer's name, stored as entered (not trimmed)
    pub actor: String,

    /// Audition venue or city
    pub location: String,

    /// Phone number as a plain integer
    pub phone: i64,

    /// Set by `call_back`; never cleared
    pub hired: bool,

    /// Role this audition is for
    pub role_id: Option<i64>,
}

impl Audition {
    /// Create a new, unpersisted audition for the given role
    ///
    /// `hired` starts out false.
    pub fn new(
        actor: impl Into<String>,
        location: impl Into<String>,
        phone: i64,
        role_id: i64,
    ) -> Self {
        Self {
            id: None,
            actor: actor.into(),
            location: location.into(),
            phone,
            hired: false,
            role_id: Some(role_id),
        }
    }

    /// Mark the actor as hired
    ///
    /// Only mutates the in-memory record; the caller persists it.
    pub fn call_back(&mut self) {
        self.hired = true;
    }

    pub fn is_hired(&self) -> bool {
        self.hired
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
