use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BootstrapError, Result};

/// A single track as the player library expects it.
///
/// Only `url` is checked. Every other key is whatever the page embedded and
/// reaches the player exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub url: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Song {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display label for logs: `name`, then `title`, then the url.
    pub fn label(&self) -> &str {
        ["name", "title"]
            .iter()
            .filter_map(|key| self.field(key).and_then(Value::as_str))
            .find(|label| !label.trim().is_empty())
            .unwrap_or(self.url.as_str())
    }
}

/// Parse the JSON embedded in the page into a validated [`Song`].
///
/// Malformed JSON is a [`BootstrapError::Parse`]; well-formed JSON that is
/// not an object with a non-blank `url` string is a
/// [`BootstrapError::InvalidSong`].
pub fn parse_song_info(raw: &str) -> Result<Song> {
    let value: Value = serde_json::from_str(raw)?;
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(BootstrapError::InvalidSong(format!(
                "expected an object, found {}",
                json_kind(&other)
            )))
        }
    };

    let url = match fields.remove("url") {
        Some(Value::String(url)) if !url.trim().is_empty() => url,
        Some(Value::String(_)) => {
            return Err(BootstrapError::InvalidSong("url is blank".to_string()))
        }
        Some(other) => {
            return Err(BootstrapError::InvalidSong(format!(
                "url must be a string, found {}",
                json_kind(&other)
            )))
        }
        None => return Err(BootstrapError::InvalidSong("url is missing".to_string())),
    };

    Ok(Song { url, fields })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_is_kept_and_used_as_label() {
        let song = parse_song_info(r#"{"title":"A","url":"a.mp3"}"#).unwrap();
        assert_eq!(song, Song::new("a.mp3").with_field("title", "A"));
        assert_eq!(song.label(), "A");
    }

    #[test]
    fn every_other_key_passes_through_unchanged() {
        let raw = json!({
            "name": "Intro",
            "artist": 5,
            "album": null,
            "cover_art_url": "c.jpg",
            "url": "i.mp3",
            "visualization": {"kind": "bars"}
        });
        let song = parse_song_info(&raw.to_string()).unwrap();
        assert_eq!(song.field("artist"), Some(&json!(5)));
        assert_eq!(serde_json::to_value(&song).unwrap(), raw);
    }

    #[test]
    fn name_and_title_can_both_be_present() {
        let song = parse_song_info(r#"{"name":"N","title":"T","url":"a.mp3"}"#).unwrap();
        assert_eq!(song.field("name"), Some(&json!("N")));
        assert_eq!(song.field("title"), Some(&json!("T")));
        assert_eq!(song.label(), "N");
    }

    #[test]
    fn label_falls_back_to_url() {
        let song = parse_song_info(r#"{"name":null,"title":" ","url":"a.mp3"}"#).unwrap();
        assert_eq!(song.label(), "a.mp3");
        assert_eq!(song.field("name"), Some(&Value::Null));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_song_info("{title: A").unwrap_err();
        assert!(matches!(err, BootstrapError::Parse(_)));
    }

    #[test]
    fn missing_or_blank_url_is_rejected() {
        for raw in [
            r#"{"title":"A"}"#,
            r#"{"title":"A","url":"   "}"#,
            r#"{"url":42}"#,
            r#"{"url":null}"#,
            r#"["a.mp3"]"#,
            "null",
        ] {
            let err = parse_song_info(raw).unwrap_err();
            assert!(
                matches!(err, BootstrapError::InvalidSong(_)),
                "{raw} gave {err:?}"
            );
        }
    }
}
