//! Session state for one browsing session.
//!
//! Holds the last successfully loaded page and the derived filtered view.
//! The state is owned by the [`App`](crate::app::App) and passed by
//! reference into filtering and rendering, so it carries no globals.

use crate::models::Character;

/// Mutable data retained between user interactions.
///
/// Invariant: `filtered_characters` is always an order-preserving subset
/// of `all_characters`, and equals it whenever the search term is empty.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The last successfully loaded page (1-based)
    pub current_page: u32,
    /// Unfiltered results of the current page
    pub all_characters: Vec<Character>,
    /// Derived view used for rendering
    pub filtered_characters: Vec<Character>,
}

impl SessionState {
    /// Create an empty session starting at page 1.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            all_characters: Vec::new(),
            filtered_characters: Vec::new(),
        }
    }

    /// Replace the loaded page wholesale after a successful fetch.
    ///
    /// Both sequences are overwritten; the filtered view resets to the
    /// full page regardless of any previously applied search term.
    pub fn replace_page(&mut self, page: u32, characters: Vec<Character>) {
        self.current_page = page;
        self.filtered_characters = characters.clone();
        self.all_characters = characters;
    }

    /// Recompute the filtered view from a search term.
    ///
    /// The match is a case-insensitive substring test on the name, using
    /// the term exactly as given (no trimming). An empty term matches
    /// everything. Original order is preserved.
    pub fn apply_filter(&mut self, term: &str) {
        let needle = term.to_lowercase();
        self.filtered_characters = self
            .all_characters
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Origin;

    fn character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            origin: Origin::default(),
            image: String::new(),
            episode: Vec::new(),
        }
    }

    fn loaded_session() -> SessionState {
        let mut session = SessionState::new();
        session.replace_page(
            1,
            vec![
                character("Rick Sanchez"),
                character("Morty Smith"),
                character("Summer Smith"),
            ],
        );
        session
    }

    #[test]
    fn test_new_session_starts_at_page_one() {
        let session = SessionState::new();
        assert_eq!(session.current_page, 1);
        assert!(session.all_characters.is_empty());
        assert!(session.filtered_characters.is_empty());
    }

    #[test]
    fn test_replace_page_sets_both_sequences() {
        let session = loaded_session();
        assert_eq!(session.current_page, 1);
        assert_eq!(session.all_characters.len(), 3);
        assert_eq!(session.filtered_characters, session.all_characters);
    }

    #[test]
    fn test_replace_page_resets_filtered_view() {
        let mut session = loaded_session();
        session.apply_filter("rick");
        assert_eq!(session.filtered_characters.len(), 1);

        session.replace_page(2, vec![character("Birdperson")]);

        assert_eq!(session.current_page, 2);
        assert_eq!(session.filtered_characters, session.all_characters);
        assert_eq!(session.filtered_characters.len(), 1);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut session = loaded_session();
        session.apply_filter("RICK");
        assert_eq!(session.filtered_characters.len(), 1);
        assert_eq!(session.filtered_characters[0].name, "Rick Sanchez");
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut session = loaded_session();
        session.apply_filter("smith");
        let names: Vec<&str> = session
            .filtered_characters
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Morty Smith", "Summer Smith"]);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let mut session = loaded_session();
        session.apply_filter("rick");
        session.apply_filter("");
        assert_eq!(session.filtered_characters, session.all_characters);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut session = loaded_session();
        session.apply_filter("smith");
        let first = session.filtered_characters.clone();
        session.apply_filter("smith");
        assert_eq!(session.filtered_characters, first);
    }

    #[test]
    fn test_whitespace_term_is_matched_untrimmed() {
        // The term is not trimmed before matching: " " matches any name
        // containing a space, which is every name on this page.
        let mut session = loaded_session();
        session.apply_filter(" ");
        assert_eq!(session.filtered_characters.len(), 3);
    }

    #[test]
    fn test_filter_with_no_matches_yields_empty() {
        let mut session = loaded_session();
        session.apply_filter("squanchy");
        assert!(session.filtered_characters.is_empty());
    }
}
