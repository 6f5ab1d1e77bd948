//! Character Models
//!
//! Data structures matching the remote character API.

use serde::{Deserialize, Serialize};

/// Named reference to a place (origin or last known location)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One character record (matches the API's `results[]` entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Sub-species; the API sends `type` and it is usually empty
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub image: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    #[serde(default)]
    pub episode: Vec<String>,
}

/// Paging metadata sent alongside each page of results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl PageInfo {
    /// The next-page pointer, treating an empty string like `null`
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }
}

/// One response body: `{ info, results }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Detail projection shown for the selected character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub image: String,
    pub origin: String,
    pub location: String,
    pub episode_count: usize,
}

impl From<&Character> for CharacterDetail {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            status: character.status.clone(),
            species: character.species.clone(),
            kind: character.kind.clone(),
            gender: character.gender.clone(),
            image: character.image.clone(),
            origin: character.origin.name.clone(),
            location: character.location.name.clone(),
            episode_count: character.episode.len(),
        }
    }
}
