//! AppMessage enum for async communication within the application.

use crate::api::ApiError;
use crate::models::Character;

/// Messages received from async operations (page fetches).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page fetch completed, successfully or not
    PageLoaded {
        /// Request sequence number this fetch was issued with
        seq: u64,
        /// The page number that was requested
        page: u32,
        /// The fetched characters, or the failure
        result: Result<Vec<Character>, ApiError>,
    },
}
