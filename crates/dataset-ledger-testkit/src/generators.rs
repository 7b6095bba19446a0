//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use dataset_ledger_core::{DataHash, Principal, Registration};

/// Generate a random DataHash.
pub fn data_hash() -> impl Strategy<Value = DataHash> {
    any::<[u8; 32]>().prop_map(DataHash::from_bytes)
}

/// Generate a random principal.
pub fn principal() -> impl Strategy<Value = Principal> {
    "[A-Z0-9]{8,24}".prop_map(Principal::new)
}

/// Generate a valid title (1 to 100 characters).
pub fn title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(String::from)
}

/// Generate a valid description (0 to 500 characters).
pub fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,500}".prop_map(String::from)
}

/// Generate a valid category (1 to 50 characters).
pub fn category() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,50}".prop_map(String::from)
}

/// Generate a valid tag (1 to 30 characters).
pub fn tag() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,30}".prop_map(String::from)
}

/// Generate a valid tag list. Count is unbounded in the ledger; kept small
/// here for test speed.
pub fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag(), 0..=8)
}

/// Generate a valid co-author list (at most 10).
pub fn co_authors() -> impl Strategy<Value = Vec<Principal>> {
    prop::collection::vec(principal(), 0..=10)
}

/// Generate one of the accepted license wire strings.
pub fn license() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CC-BY"),
        Just("MIT"),
        Just("GPL"),
        Just("Public Domain"),
    ]
    .prop_map(String::from)
}

/// Generate valid optional metadata (at most 1024 bytes).
pub fn metadata() -> impl Strategy<Value = Option<Bytes>> {
    prop::option::of(prop::collection::vec(any::<u8>(), 0..=1024).prop_map(Bytes::from))
}

/// Generate a registration that passes every validation check.
pub fn valid_registration() -> impl Strategy<Value = Registration> {
    (
        data_hash(),
        title(),
        description(),
        co_authors(),
        category(),
        tags(),
        license(),
        metadata(),
    )
        .prop_map(
            |(hash, title, description, co_authors, category, tags, license, metadata)| {
                Registration {
                    hash: Bytes::copy_from_slice(hash.as_bytes()),
                    title,
                    description,
                    co_authors,
                    category,
                    tags,
                    license,
                    metadata,
                }
            },
        )
}
