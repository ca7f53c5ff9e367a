use async_trait::async_trait;
use people::contract::model::Person;
use people::domain::query::{SortField, SortOrder};
use people::domain::repo::PeopleRepository;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory repository backing service-level tests.
#[derive(Default)]
pub struct InMemoryPeopleRepository {
    rows: Mutex<HashMap<Uuid, Person>>,
}

impl InMemoryPeopleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(p: &Person, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        p.name.to_lowercase().contains(&needle) || p.city.to_lowercase().contains(&needle)
    }

    fn compare(a: &Person, b: &Person, sort_by: SortField) -> Ordering {
        match sort_by {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::City => a.city.cmp(&b.city),
        }
    }
}

#[async_trait]
impl PeopleRepository for InMemoryPeopleRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Person>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, p: Person) -> anyhow::Result<()> {
        self.rows.lock().unwrap().insert(p.id, p);
        Ok(())
    }

    async fn update(&self, p: Person) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&p.id) {
            Some(slot) => {
                *slot = p;
                Ok(())
            }
            None => anyhow::bail!("no row matched id {}", p.id),
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn count(&self, search: &str) -> anyhow::Result<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().filter(|p| Self::matches(p, search)).count() as u64)
    }

    async fn list_page(
        &self,
        search: &str,
        sort_by: SortField,
        order: SortOrder,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Person>> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<Person> = rows
            .values()
            .filter(|p| Self::matches(p, search))
            .cloned()
            .collect();
        matched.sort_by(|a, b| Self::compare(a, b, sort_by));
        if order == SortOrder::Desc {
            matched.reverse();
        }
        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
