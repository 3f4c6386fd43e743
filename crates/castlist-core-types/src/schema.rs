//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_ROLE_ID: &str = "role_id";
pub const FIELD_AUDITION_ID: &str = "audition_id";
pub const FIELD_CHARACTER_NAME: &str = "character_name";

// Collection sizes
pub const FIELD_AUDITION_COUNT: &str = "audition_count";
pub const FIELD_ROLE_COUNT: &str = "role_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_ENTITY_ID: &str = "err_entity_id";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
