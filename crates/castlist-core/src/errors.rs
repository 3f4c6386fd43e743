use thiserror::Error;

/// Result type alias using CastingError
pub type Result<T> = std::result::Result<T, CastingError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation and entity that failed.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the casting model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastingError {
    /// Role not found in storage
    #[error("Role not found: {role}")]
    RoleNotFound { role: String },

    /// Audition not found in storage
    #[error("Audition not found: {audition_id}")]
    AuditionNotFound { audition_id: i64 },

    /// Audition was attached to a role its role_id does not reference
    #[error("Audition {audition_id:?} has role_id {audition_role_id:?} but was attached to role {role_id:?}")]
    AuditionRoleMismatch {
        audition_id: Option<i64>,
        audition_role_id: Option<i64>,
        role_id: Option<i64>,
    },
}

impl From<CastingError> for ExError {
    fn from(err: CastingError) -> Self {
        match err {
            CastingError::RoleNotFound { role } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(role)
                .with_message("Role not found"),

            CastingError::AuditionNotFound { audition_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(audition_id.to_string())
                .with_message("Audition not found"),

            CastingError::AuditionRoleMismatch {
                audition_id,
                audition_role_id,
                role_id,
            } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("attach_audition")
                .with_message(format!(
                    "Audition {:?} references role {:?}, not role {:?}",
                    audition_id, audition_role_id, role_id
                )),
        }
    }
}
