use uuid::{Uuid, Variant};

use super::EntityError;

/// Entity identifier: a random (v4) UUID.
pub type Id = Uuid;

pub fn new_id() -> Id {
    Uuid::new_v4()
}

/// Parse external text into an [`Id`].
pub fn parse_id(raw: &str) -> Result<Id, EntityError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EntityError::RequiredId);
    }
    let id = Uuid::parse_str(raw).map_err(|_| EntityError::InvalidId)?;
    check_id(&id)?;
    Ok(id)
}

/// Nil is treated as absent; anything outside the RFC 4122 variant is malformed.
pub fn check_id(id: &Id) -> Result<(), EntityError> {
    if id.is_nil() {
        return Err(EntityError::RequiredId);
    }
    if id.get_variant() != Variant::RFC4122 {
        return Err(EntityError::InvalidId);
    }
    Ok(())
}
