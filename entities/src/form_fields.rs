//! Decoders for values arriving from HTML form submissions.
//!
//! Browsers send every field as text, so the local models use these with
//! `#[serde(deserialize_with = ...)]` to accept both form bodies and JSON.

use chrono::NaiveDateTime;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

use crate::genres::Genres;

const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<String>),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrText {
    Bool(bool),
    Text(String),
}

/// Genres given either as a list (repeated form keys, JSON array) or as one
/// comma separated string.
pub fn genre_list<'de, D>(deserializer: D) -> Result<Genres, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match ListOrText::deserialize(deserializer)? {
        ListOrText::List(list) => list,
        ListOrText::Text(text) => text.split(',').map(str::to_owned).collect(),
    };
    Ok(Genres(
        items
            .into_iter()
            .map(|genre| genre.trim().to_string())
            .filter(|genre| !genre.is_empty())
            .collect(),
    ))
}

/// Checkbox semantics: a present "y"/"on"/"true"/"1" is checked, anything else is not.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolOrText::deserialize(deserializer)? {
        BoolOrText::Bool(value) => value,
        BoolOrText::Text(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "on" | "true" | "1"
        ),
    })
}

/// Blank text is treated as an absent value.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

pub fn parse_start_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

pub fn start_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_start_time(&text)
        .ok_or_else(|| D::Error::custom(format!("unrecognised start time \"{}\"", text)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "genre_list")]
        genres: Genres,
        #[serde(default, deserialize_with = "checkbox")]
        seeking: bool,
        #[serde(default, deserialize_with = "optional_text")]
        phone: Option<String>,
    }

    #[derive(Deserialize)]
    struct TimeProbe {
        #[serde(deserialize_with = "start_time")]
        start_time: NaiveDateTime,
    }

    #[test]
    fn form_genres_split_on_commas() {
        let probe: Probe = serde_urlencoded::from_str("genres=Jazz%2C+Funk%2C%2CSoul").unwrap();
        assert_eq!(probe.genres.as_slice(), ["Jazz", "Funk", "Soul"]);
    }

    #[test]
    fn repeated_form_genres_keep_their_order() {
        let probe: Probe = serde_html_form::from_str("genres=Jazz&genres=Funk&genres=+").unwrap();
        assert_eq!(probe.genres.as_slice(), ["Jazz", "Funk"]);
        let single: Probe = serde_html_form::from_str("genres=Jazz").unwrap();
        assert_eq!(single.genres.as_slice(), ["Jazz"]);
    }

    #[test]
    fn json_genres_keep_their_order() {
        let probe: Probe = serde_json::from_str(r#"{"genres": ["Rock", "Blues"]}"#).unwrap();
        assert_eq!(probe.genres.as_slice(), ["Rock", "Blues"]);
    }

    #[test]
    fn checkbox_accepts_browser_values() {
        let checked: Probe = serde_urlencoded::from_str("seeking=y").unwrap();
        assert!(checked.seeking);
        let on: Probe = serde_urlencoded::from_str("seeking=on").unwrap();
        assert!(on.seeking);
        let missing: Probe = serde_urlencoded::from_str("").unwrap();
        assert!(!missing.seeking);
        let json: Probe = serde_json::from_str(r#"{"seeking": true}"#).unwrap();
        assert!(json.seeking);
    }

    #[test]
    fn blank_optional_text_is_absent() {
        let blank: Probe = serde_urlencoded::from_str("phone=+++").unwrap();
        assert_eq!(blank.phone, None);
        let given: Probe = serde_urlencoded::from_str("phone=415-555-0100").unwrap();
        assert_eq!(given.phone.as_deref(), Some("415-555-0100"));
    }

    #[test]
    fn start_time_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 11, 2)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap();
        for text in ["2026-11-02T20:30", "2026-11-02T20:30:00", "2026-11-02 20:30:00"] {
            assert_eq!(parse_start_time(text), Some(expected), "{}", text);
        }
        assert_eq!(parse_start_time("next tuesday"), None);

        let probe: TimeProbe = serde_urlencoded::from_str("start_time=2026-11-02T20%3A30").unwrap();
        assert_eq!(probe.start_time, expected);
        assert!(serde_urlencoded::from_str::<TimeProbe>("start_time=soon").is_err());
    }
}
