//! Field validation for dataset registration and update.
//!
//! Checks run in a fixed order and the first failure decides the returned
//! error. Callers that branch on specific error kinds rely on that order.

use crate::error::ValidationError;
use crate::types::{DataHash, License, Registration};

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Maximum number of co-authors.
pub const MAX_CO_AUTHORS: usize = 10;

/// Maximum category length in characters.
pub const MAX_CATEGORY_CHARS: usize = 50;

/// Maximum tag length in characters.
pub const MAX_TAG_CHARS: usize = 30;

/// Maximum metadata size in bytes.
pub const MAX_METADATA_BYTES: usize = 1024;

/// Validate a registration.
///
/// This performs, in order:
/// 1. Hash length (exactly 32 bytes)
/// 2. Title length (1 to 100 characters)
/// 3. Description length (at most 500 characters)
/// 4. Co-author count (at most 10)
/// 5. Category length (1 to 50 characters)
/// 6. Tag lengths (each 1 to 30 characters)
/// 7. License membership in the closed set
/// 8. Metadata size (at most 1024 bytes when present)
///
/// Returns the parsed license on success so callers do not re-parse it.
pub fn validate_registration(registration: &Registration) -> Result<License, ValidationError> {
    // 1. Hash length
    if registration.hash.len() != DataHash::LEN {
        return Err(ValidationError::InvalidHash {
            len: registration.hash.len(),
        });
    }

    // 2. Title
    if !char_len_in(&registration.title, 1, MAX_TITLE_CHARS) {
        return Err(ValidationError::InvalidTitle);
    }

    // 3. Description
    if registration.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::InvalidDescription);
    }

    // 4. Co-authors
    if registration.co_authors.len() > MAX_CO_AUTHORS {
        return Err(ValidationError::TooManyCoAuthors {
            count: registration.co_authors.len(),
        });
    }

    // 5. Category
    if !char_len_in(&registration.category, 1, MAX_CATEGORY_CHARS) {
        return Err(ValidationError::InvalidCategory);
    }

    // 6. Tags
    if !registration
        .tags
        .iter()
        .all(|tag| char_len_in(tag, 1, MAX_TAG_CHARS))
    {
        return Err(ValidationError::InvalidTags);
    }

    // 7. License
    let license = License::parse(&registration.license)
        .ok_or_else(|| ValidationError::InvalidLicense(registration.license.clone()))?;

    // 8. Metadata
    if let Some(metadata) = &registration.metadata {
        if metadata.len() > MAX_METADATA_BYTES {
            return Err(ValidationError::InvalidMetadata {
                len: metadata.len(),
            });
        }
    }

    Ok(license)
}

/// Validate the mutable fields of an update.
///
/// Applies the title check, then the description check, matching the order
/// used at registration.
pub fn validate_update(title: &str, description: &str) -> Result<(), ValidationError> {
    if !char_len_in(title, 1, MAX_TITLE_CHARS) {
        return Err(ValidationError::InvalidTitle);
    }

    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::InvalidDescription);
    }

    Ok(())
}

/// Character count in [min, max]. Lengths are Unicode scalar values, not
/// bytes.
fn char_len_in(s: &str, min: usize, max: usize) -> bool {
    let len = s.chars().count();
    len >= min && len <= max
}
