use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use finder_core::model::{Record, RecordId, TagName};

use crate::config::FinderConfig;
use crate::error::FetchError;
use crate::source::RecordSource;

/// `RecordSource` backed by the public PokeAPI REST endpoints.
#[derive(Clone)]
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
}

impl HttpRecordSource {
    /// Build a client honouring the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: &FinderConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_record(&self, id: RecordId) -> Result<Record, FetchError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        let payload: PokemonPayload = self.get_json(url).await?;
        normalize_record(id, payload)
    }

    async fn list_tags(&self) -> Result<Vec<TagName>, FetchError> {
        let url = format!("{}/type/", self.base_url);
        let payload: NamedResourceList = self.get_json(url).await?;
        normalize_tags(payload)
    }
}

#[derive(Debug, Deserialize)]
struct PokemonPayload {
    name: String,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(default)]
    slot: Option<u8>,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamedResourceList {
    results: Vec<NamedResource>,
}

fn normalize_record(id: RecordId, payload: PokemonPayload) -> Result<Record, FetchError> {
    let mut slots = payload.types;
    // Stable sort keeps document order for payloads without slot numbers.
    slots.sort_by_key(|slot| slot.slot.unwrap_or(u8::MAX));

    let tags = slots
        .into_iter()
        .map(|slot| TagName::new(slot.kind.name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| FetchError::InvalidPayload(format!("record {id}: {err}")))?;

    Record::with_primary_image(id, payload.name, tags)
        .map_err(|err| FetchError::InvalidPayload(format!("record {id}: {err}")))
}

fn normalize_tags(payload: NamedResourceList) -> Result<Vec<TagName>, FetchError> {
    payload
        .results
        .into_iter()
        .map(|entry| TagName::new(entry.name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| FetchError::InvalidPayload(format!("type listing: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::model::ImageKind;

    fn id(value: u32) -> RecordId {
        RecordId::new(value).unwrap()
    }

    #[test]
    fn normalizes_pokemon_payload() {
        let payload: PokemonPayload = serde_json::from_str(
            r#"{
                "id": 6,
                "name": "charizard",
                "types": [
                    {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
                    {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}
                ],
                "weight": 905
            }"#,
        )
        .unwrap();

        let record = normalize_record(id(6), payload).unwrap();
        assert_eq!(record.id(), id(6));
        assert_eq!(record.display_name(), "charizard");
        assert_eq!(record.image().kind(), ImageKind::Primary);
        assert_eq!(
            record.image().as_str(),
            "https://img.pokemondb.net/sprites/home/normal/charizard.png"
        );
        let tags: Vec<&str> = record.tags().iter().map(TagName::as_str).collect();
        assert_eq!(tags, vec!["fire", "flying"]);
    }

    #[test]
    fn blank_name_is_an_invalid_payload() {
        let payload: PokemonPayload =
            serde_json::from_str(r#"{"name": " ", "types": []}"#).unwrap();
        assert!(matches!(
            normalize_record(id(1), payload),
            Err(FetchError::InvalidPayload(_))
        ));
    }

    #[test]
    fn missing_name_fails_to_decode() {
        let parsed: Result<PokemonPayload, _> = serde_json::from_str(r#"{"types": []}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn normalizes_type_listing() {
        let payload: NamedResourceList = serde_json::from_str(
            r#"{"count": 3, "results": [{"name": "normal", "url": "x"}, {"name": "fire", "url": "y"}, {"name": "stellar", "url": "z"}]}"#,
        )
        .unwrap();
        let tags = normalize_tags(payload).unwrap();
        let names: Vec<&str> = tags.iter().map(TagName::as_str).collect();
        assert_eq!(names, vec!["normal", "fire", "stellar"]);
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = FinderConfig {
            api_base_url: "http://localhost:9/api/v2/".into(),
            ..FinderConfig::default()
        };
        let source = HttpRecordSource::new(&config).unwrap();
        assert_eq!(source.base_url(), "http://localhost:9/api/v2");
    }
}
