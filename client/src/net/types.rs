//! Wire DTOs for the video listing endpoint.
//!
//! DESIGN
//! ======
//! The listing endpoint is an external collaborator, so its payload is parsed
//! against an explicit schema at the boundary. Fields the gallery can render
//! without (`title`, `playback_ids`, the `data` wrapper itself) tolerate being
//! absent or `null`; anything else that does not fit is a decode error.
//!
//! Derived struct deserializers also accept JSON arrays by position, so
//! `check_listing_shape` runs first and requires objects wherever the schema
//! has one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A video asset as returned by `GET /api/mux/list`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VideoRecord {
    /// Opaque asset identifier.
    pub id: String,
    /// Display title, if the asset has one.
    #[serde(default)]
    pub title: Option<String>,
    /// Playback identifiers in the order the host reports them.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub playback_ids: Vec<PlaybackId>,
}

impl VideoRecord {
    /// The playback id used for thumbnails and the playback route.
    pub fn first_playback_id(&self) -> Option<&str> {
        self.playback_ids.first().map(|p| p.id.as_str())
    }

    /// Title text for captions and `alt` attributes; empty when absent.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// One playback identifier attached to an asset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlaybackId {
    pub id: String,
    /// Access policy reported by the host (`public`, `signed`); informational only.
    #[serde(default)]
    pub policy: Option<String>,
}

/// Envelope of the listing response: `{ "data": [VideoRecord, ...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VideoListResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<VideoRecord>,
}

/// Require objects for the envelope, each record and each playback id.
///
/// # Errors
///
/// Returns a description of the first value that is not an object.
pub fn check_listing_shape(value: &Value) -> Result<(), String> {
    let envelope = value.as_object().ok_or("expected a JSON object")?;
    let Some(Value::Array(records)) = envelope.get("data") else {
        return Ok(());
    };
    for (i, record) in records.iter().enumerate() {
        let record = record
            .as_object()
            .ok_or_else(|| format!("data[{i}]: expected an object"))?;
        let Some(Value::Array(playback_ids)) = record.get("playback_ids") else {
            continue;
        };
        if let Some(j) = playback_ids.iter().position(|p| !p.is_object()) {
            return Err(format!("data[{i}].playback_ids[{j}]: expected an object"));
        }
    }
    Ok(())
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
