pub mod artist;
pub mod show;
pub mod venue;

use serde::Deserialize;
use validator::Validate;

/// Body of a name search, shared by the venue and artist endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    /// Substring to match, case-insensitively.
    pub search_term: String,
}
