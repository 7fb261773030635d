//! Venue restriction supplied by the page embedding the search screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VenueFilter {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub public_name: Option<String>,
}

impl VenueFilter {
    /// Filter known only by id, before the venue names have been fetched.
    pub fn from_id(id: u64) -> Self {
        Self { id, name: String::new(), public_name: None }
    }

    pub fn display_name(&self) -> &str {
        match &self.public_name {
            Some(public_name) if !public_name.trim().is_empty() => public_name,
            _ => &self.name,
        }
    }
}
