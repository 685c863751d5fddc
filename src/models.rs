//! Domain model for a single journal entry. A `Record` is a light-weight value
//! that the store keeps in order and hands out by reference; it can only be
//! built through the validating constructor, and that includes records read
//! back from serialized bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest rating the star control can produce. The entity itself does not
/// enforce it; only negative ratings are rejected.
pub const MAX_RATING: i64 = 5;

/// Reasons a record could not be built or decoded.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid record (empty name: {name_empty}, rating: {rating})")]
    Invalid { name_empty: bool, rating: i64 },
    #[error("malformed record data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
/// A named meal with an optional photo and an integer rating.
pub struct Record {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none", with = "photo_serde")]
    photo: Option<Vec<u8>>,
    rating: i64,
}

impl Record {
    /// Build a record, returning `None` when the name is empty or the rating is
    /// negative. Ratings above [`MAX_RATING`] are accepted.
    pub fn new(name: impl Into<String>, photo: Option<Vec<u8>>, rating: i64) -> Option<Self> {
        Self::validated(name.into(), photo, rating).ok()
    }

    fn validated(name: String, photo: Option<Vec<u8>>, rating: i64) -> Result<Self, RecordError> {
        if name.is_empty() || rating < 0 {
            return Err(RecordError::Invalid {
                name_empty: name.is_empty(),
                rating,
            });
        }

        Ok(Self {
            name,
            photo,
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&[u8]> {
        self.photo.as_deref()
    }

    pub fn rating(&self) -> i64 {
        self.rating
    }

    /// Encode the record as a JSON object tagged with `name`, `photo` and
    /// `rating`. The photo is base64 text and is left out entirely when absent.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode bytes produced by [`Record::to_bytes`]. Decoding goes through
    /// the same validation as [`Record::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let raw: RawRecord = serde_json::from_slice(bytes)?;
        Record::try_from(raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unvalidated wire shape; every decoded record is funnelled through
/// `Record::validated`.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default, with = "photo_serde")]
    photo: Option<Vec<u8>>,
    rating: i64,
}

impl TryFrom<RawRecord> for Record {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Record::validated(raw.name, raw.photo, raw.rating)
    }
}

mod photo_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(photo: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match photo {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
