//! Strong type definitions for the Dataset Ledger.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte content hash identifying a dataset.
///
/// This is the content-address of a dataset and the primary storage key.
/// Two datasets with the same content have the same DataHash, which is why
/// registration rejects a hash that is already present.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataHash(pub [u8; 32]);

impl DataHash {
    /// Length of a content hash in bytes.
    pub const LEN: usize = 32;

    /// Create a new DataHash from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compute the content hash of raw dataset content.
    pub fn digest(content: &[u8]) -> Self {
        Self(*blake3::hash(content).as_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != Self::LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for DataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for DataHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for DataHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for DataHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for DataHash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// A sequential dataset identifier.
///
/// Assigned by the registry starting at 0, contiguous, never reused. The id
/// of the next registration always equals the count of successful
/// registrations so far.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DatasetId(pub u64);

impl DatasetId {
    /// Create from a raw id value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DatasetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An opaque caller identity.
///
/// The ledger never inspects the contents; equality is the only operation it
/// relies on. Values are supplied by the embedding environment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from any string-like identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Accepted dataset licenses.
///
/// A closed set. Parsing compares the exact wire string with no case
/// folding, so `"cc-by"` is not a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "CC-BY")]
    CcBy,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "GPL")]
    Gpl,
    #[serde(rename = "Public Domain")]
    PublicDomain,
}

impl License {
    /// Parse from the exact wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CC-BY" => Some(Self::CcBy),
            "MIT" => Some(Self::Mit),
            "GPL" => Some(Self::Gpl),
            "Public Domain" => Some(Self::PublicDomain),
            _ => None,
        }
    }

    /// The wire string for this license.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CcBy => "CC-BY",
            Self::Mit => "MIT",
            Self::Gpl => "GPL",
            Self::PublicDomain => "Public Domain",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered dataset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Sequential id assigned at registration. Immutable.
    pub id: DatasetId,

    /// Content hash; the primary storage key. Immutable, unique across the
    /// lifetime of the ledger.
    pub hash: DataHash,

    /// Title, 1 to 100 characters.
    pub title: String,

    /// Description, at most 500 characters.
    pub description: String,

    /// The registering caller. Immutable; gates update and deactivate.
    pub owner: Principal,

    /// Co-author identities, at most 10, in submission order.
    pub co_authors: Vec<Principal>,

    /// Block height at creation or last update.
    pub timestamp: u64,

    /// Category, 1 to 50 characters.
    pub category: String,

    /// Tags, each 1 to 30 characters, in submission order. No count limit.
    pub tags: Vec<String>,

    /// License under which the dataset is published.
    pub license: License,

    /// `true` while active. Deactivation is one-way; no operation sets this
    /// back to `true`.
    pub status: bool,

    /// Optional opaque sidecar blob, at most 1024 bytes.
    pub metadata: Option<Bytes>,
}

/// The most recent update applied to a dataset.
///
/// At most one per dataset id; overwritten on each update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetUpdate {
    /// The title the update installed.
    pub title: String,

    /// The description the update installed.
    pub description: String,

    /// Block height at which the update was applied.
    pub timestamp: u64,

    /// Who applied the update (always the owner).
    pub updater: Principal,
}

/// Raw input to `register`, prior to validation.
///
/// Field constraints are enforced by
/// [`validate_registration`](crate::validation::validate_registration), not
/// by construction, so callers observe the documented check ordering rather
/// than a constructor panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Content hash bytes; must be exactly 32 bytes.
    pub hash: Bytes,

    /// Title, 1 to 100 characters.
    pub title: String,

    /// Description, at most 500 characters.
    pub description: String,

    /// Co-author identities, at most 10.
    pub co_authors: Vec<Principal>,

    /// Category, 1 to 50 characters.
    pub category: String,

    /// Tags, each 1 to 30 characters.
    pub tags: Vec<String>,

    /// License wire string, one of the closed set.
    pub license: String,

    /// Optional sidecar blob, at most 1024 bytes.
    pub metadata: Option<Bytes>,
}

impl Registration {
    /// Start building a registration for the given hash and title.
    pub fn builder(hash: impl Into<Bytes>, title: impl Into<String>) -> RegistrationBuilder {
        RegistrationBuilder {
            inner: Registration {
                hash: hash.into(),
                title: title.into(),
                description: String::new(),
                co_authors: Vec::new(),
                category: String::new(),
                tags: Vec::new(),
                license: String::new(),
                metadata: None,
            },
        }
    }
}

/// Builder for a [`Registration`].
///
/// Only collects fields; validation happens at registration time.
#[derive(Debug, Clone)]
pub struct RegistrationBuilder {
    inner: Registration,
}

impl RegistrationBuilder {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    /// Add a co-author.
    pub fn co_author(mut self, co_author: impl Into<Principal>) -> Self {
        self.inner.co_authors.push(co_author.into());
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.inner.category = category.into();
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.inner.tags.push(tag.into());
        self
    }

    /// Add several tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the license wire string.
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.inner.license = license.into();
        self
    }

    /// Attach a metadata blob.
    pub fn metadata(mut self, metadata: impl Into<Bytes>) -> Self {
        self.inner.metadata = Some(metadata.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> Registration {
        self.inner
    }
}
