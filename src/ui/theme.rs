//! Color theme constants for the mortui UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (hints, image URLs)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading spinner and in-flight state - bright green
pub const COLOR_LOADING: Color = Color::LightGreen;

/// Error banner text - red
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Status Badge Colors
// ============================================================================

/// Alive status badge - green
pub const COLOR_STATUS_ALIVE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Dead status badge - red
pub const COLOR_STATUS_DEAD: Color = Color::Red;

/// Unknown (or any unrecognized) status badge - gray
pub const COLOR_STATUS_UNKNOWN: Color = Color::Gray;
