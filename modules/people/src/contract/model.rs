use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person record as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub city: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the record is edited for the first time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw field values submitted from a form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub age: String,
    pub city: String,
}

/// One listing page plus the numbers needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPage {
    pub items: Vec<Person>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
}
