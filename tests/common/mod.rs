//! Common test utilities for integration tests.
//!
//! Provides character fixtures and API-shaped JSON payloads shared by the
//! API client and session flow tests.

#![allow(dead_code)]

use mortui::models::{Character, Origin};
use serde_json::{json, Value};

/// Build a character record with the given name and status.
pub fn character(name: &str, status: &str) -> Character {
    Character {
        name: name.to_string(),
        status: status.to_string(),
        species: "Human".to_string(),
        gender: "Male".to_string(),
        origin: Origin {
            name: "Earth (C-137)".to_string(),
        },
        image: format!("https://rickandmortyapi.com/avatar/{}.jpeg", name.replace(' ', "-")),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
    }
}

/// A character object shaped like the real API response, including fields
/// the client ignores.
pub fn character_json(id: u32, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": format!("https://rickandmortyapi.com/api/character/{}", id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// A full page envelope holding the given character objects.
pub fn page_json(characters: Vec<Value>) -> Value {
    json!({
        "info": {
            "count": 826,
            "pages": 42,
            "next": "https://rickandmortyapi.com/api/character?page=2",
            "prev": null
        },
        "results": characters
    })
}

/// The standard two-character page used by the search scenarios.
pub fn rick_and_morty_page() -> Value {
    page_json(vec![
        character_json(1, "Rick Sanchez", "Alive"),
        character_json(2, "Morty Smith", "Alive"),
    ])
}
