use serde::{Deserialize, Serialize};

/// A showcased project as it appears in the public gallery and the admin
/// project log. Identity is the caller-supplied `id`; the collection is kept
/// newest-first and the store never checks ids for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub challenges: Vec<String>,
    pub solution: String,
    pub tags: Vec<String>,
    pub image: String,
    pub live_link: String,
    pub source_link: String,
}
