//! Data model for the Rick and Morty character API.
//!
//! These structs mirror the relevant parts of the `/character` list
//! response. Fields the UI never reads (the pagination `info` envelope,
//! character `location`, etc.) are simply not declared; serde ignores them.

use serde::{Deserialize, Serialize};

/// Where a character is originally from. Only the name is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Origin {
    #[serde(default)]
    pub name: String,
}

/// A single character record from the API.
///
/// `status` is kept as a raw string rather than an enum: the API documents
/// "Alive", "Dead" and "unknown", but the badge mapping in the UI must
/// tolerate any value, so deserialization never rejects one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub image: String,
    /// Episode URLs the character appears in. Only the length is used.
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// Response envelope for `GET /character?page={n}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}
