//! Character card view-models and rendering.
//!
//! [`CardView`] is a pure projection of a [`Character`] into the fields the
//! card displays; building the views is independent of ratatui so the
//! mapping can be tested on its own.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Character;

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_STATUS_ALIVE, COLOR_STATUS_DEAD, COLOR_STATUS_UNKNOWN};

/// Visual style of the status badge.
///
/// Total mapping from the status string: "Alive" and "Dead" get their own
/// styles, everything else falls back to `Unknown`. The fallback is
/// required behavior, not an error - the API is free to return values
/// outside the documented set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Alive,
    Dead,
    Unknown,
}

impl StatusStyle {
    /// Map a raw status string to its badge style.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Alive" => StatusStyle::Alive,
            "Dead" => StatusStyle::Dead,
            _ => StatusStyle::Unknown,
        }
    }

    /// Badge color for this style.
    pub fn color(&self) -> Color {
        match self {
            StatusStyle::Alive => COLOR_STATUS_ALIVE,
            StatusStyle::Dead => COLOR_STATUS_DEAD,
            StatusStyle::Unknown => COLOR_STATUS_UNKNOWN,
        }
    }

    /// Badge glyph for this style.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusStyle::Alive => "●",
            StatusStyle::Dead => "✗",
            StatusStyle::Unknown => "?",
        }
    }
}

/// Everything a rendered card displays, derived from one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub status: String,
    pub status_style: StatusStyle,
    pub species: String,
    pub gender: String,
    pub origin: String,
    pub image_url: String,
    pub episode_count: usize,
}

impl CardView {
    /// Project a character into its card view. Pure function of the input.
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            status: character.status.clone(),
            status_style: StatusStyle::from_status(&character.status),
            species: character.species.clone(),
            gender: character.gender.clone(),
            origin: character.origin.name.clone(),
            image_url: character.image.clone(),
            episode_count: character.episode_count(),
        }
    }

    /// Render this card as text lines, one card after another in the
    /// content region.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let badge_style = Style::default().fg(self.status_style.color());
        vec![
            Line::from(Span::styled(
                self.name.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} {}", self.status_style.glyph(), self.status), badge_style),
                Span::raw(" · "),
                Span::raw(self.species.clone()),
                Span::raw(" · "),
                Span::raw(self.gender.clone()),
            ]),
            Line::from(vec![
                Span::styled("Origin: ", Style::default().fg(COLOR_DIM)),
                Span::raw(self.origin.clone()),
            ]),
            Line::from(vec![
                Span::styled("Episodes: ", Style::default().fg(COLOR_DIM)),
                Span::raw(self.episode_count.to_string()),
            ]),
            Line::from(Span::styled(
                self.image_url.clone(),
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(""),
        ]
    }
}

/// Build the card views for an ordered sequence of characters.
pub fn build_cards(characters: &[Character]) -> Vec<CardView> {
    characters.iter().map(CardView::from_character).collect()
}
