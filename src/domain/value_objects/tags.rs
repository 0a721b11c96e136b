//! Tag sets.
//!
//! A tag set is an ordered sequence of key/value maps, e.g.
//! `[{"faculty": "IT"}, {"course": 3, "online": true}]`. Order matters both
//! between maps and between keys inside a map, so nothing is sorted or
//! normalized: the value is stored as its compact JSON text in a `TEXT`
//! column and read back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

/// One key/value map inside a tag set.
pub type Tag = Map<String, Value>;

/// Ordered sequence of key/value maps persisted as one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    /// First value stored under `key`, scanning maps in order.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find_map(|tag| tag.get(key))
    }

    /// Compact JSON text, exactly as written to the store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Parse the stored JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl Type<Postgres> for Tags {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for Tags {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let text = self.to_json()?;
        <String as Encode<'q, Postgres>>::encode_by_ref(&text, buf)
    }
}

impl<'r> Decode<'r, Postgres> for Tags {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(Tags::from_json(text)?)
    }
}
