use crate::contract::model::Person;
use crate::domain::query::{SortField, SortOrder};
use async_trait::async_trait;
use uuid::Uuid;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Load a person by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Person>>;
    /// Insert a fully-formed record.
    ///
    /// Service computes id/timestamps/validation; repo persists.
    async fn insert(&self, p: Person) -> anyhow::Result<()>;
    /// Replace an existing record (matched by primary key in `p.id`).
    async fn update(&self, p: Person) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Count records whose name or city contains `search` (all records
    /// when the search text is empty).
    async fn count(&self, search: &str) -> anyhow::Result<u64>;
    /// Fetch one sorted page of matching records.
    async fn list_page(
        &self,
        search: &str,
        sort_by: SortField,
        order: SortOrder,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Person>>;
}
