use crate::types::DbId;

/// Why a handler was looking an entity up when it came back missing.
///
/// The wording of the not-found message depends on it, and clients match
/// on those exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPurpose {
    /// Plain read, or a parent check before creating a child.
    Read,
    /// Deleting the entity itself.
    Delete,
    /// Deleting a child of the entity (or the child itself).
    CompleteDeletion,
}

impl LookupPurpose {
    fn suffix(self) -> &'static str {
        match self {
            LookupPurpose::Read => "",
            LookupPurpose::Delete => " in order to delete",
            LookupPurpose::CompleteDeletion => " in order to complete deletion",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The `Display` output is the client-facing message.
    #[error("{entity} could not be found{}", .purpose.suffix())]
    NotFound {
        entity: &'static str,
        id: DbId,
        purpose: LookupPurpose,
    },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId, purpose: LookupPurpose) -> Self {
        CoreError::NotFound {
            entity,
            id,
            purpose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lookup_has_no_suffix() {
        let err = CoreError::not_found("Doctor", 7, LookupPurpose::Read);
        assert_eq!(err.to_string(), "Doctor could not be found");
    }

    #[test]
    fn delete_lookup_message() {
        let err = CoreError::not_found("Doctor", 7, LookupPurpose::Delete);
        assert_eq!(
            err.to_string(),
            "Doctor could not be found in order to delete"
        );
    }

    #[test]
    fn complete_deletion_lookup_message() {
        let doctor = CoreError::not_found("Doctor", 1, LookupPurpose::CompleteDeletion);
        let review = CoreError::not_found("Review", 2, LookupPurpose::CompleteDeletion);
        assert_eq!(
            doctor.to_string(),
            "Doctor could not be found in order to complete deletion"
        );
        assert_eq!(
            review.to_string(),
            "Review could not be found in order to complete deletion"
        );
    }
}
