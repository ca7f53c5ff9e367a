use std::sync::Arc;

use crate::config::PeopleConfig;
use crate::contract::model::{Person, PersonInput, PersonPage};
use crate::domain::error::DomainError;
use crate::domain::query::{ListQuery, Pagination};
use crate::domain::repo::PeopleRepository;
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub const AGE_MIN: i32 = 0;
pub const AGE_MAX: i32 = 150;

const MSG_FIELDS_REQUIRED: &str = "All fields are required.";
const MSG_AGE_RANGE: &str = "Age must be a valid number between 0 and 150.";

/// Result of an update: either the record changed, or the submitted values
/// were identical to the stored ones and nothing was written.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(Person),
    Unchanged(Person),
}

/// Domain service with business rules for person records.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PeopleRepository>,
    config: PeopleConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn PeopleRepository>, config: PeopleConfig) -> Self {
        Self { repo, config }
    }

    /// List one page of people matching the query, with the requested page
    /// clamped into the valid range.
    #[instrument(name = "people.service.list_people", skip(self))]
    pub async fn list_people(&self, query: &ListQuery) -> Result<PersonPage, DomainError> {
        debug!("Listing people");

        let total = self
            .repo
            .count(&query.search)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let pg = Pagination::clamp(query.page, total, self.config.page_size);

        let items = self
            .repo
            .list_page(&query.search, query.sort_by, query.order, pg.offset, pg.limit)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Listed {} people on page {}/{}", items.len(), pg.page, pg.total_pages);
        Ok(PersonPage {
            items,
            current_page: pg.page,
            total_pages: pg.total_pages,
            total,
        })
    }

    #[instrument(name = "people.service.get_person", skip(self), fields(person_id = %id))]
    pub async fn get_person(&self, id: Uuid) -> Result<Person, DomainError> {
        debug!("Getting person by id");

        let person = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::person_not_found(id))?;
        Ok(person)
    }

    #[instrument(name = "people.service.create_person", skip(self, input))]
    pub async fn create_person(&self, input: PersonInput) -> Result<Person, DomainError> {
        info!("Creating new person");

        let (name, age, city) = self.validate_input(&input)?;

        let person = Person {
            id: Uuid::new_v4(),
            name,
            age,
            city,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.repo
            .insert(person.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created person with id={}", person.id);
        Ok(person)
    }

    /// Full replace of name/age/city, matched by id. Existence is
    /// re-checked before comparing, so "no changes" is only reported for a
    /// record that is still present.
    #[instrument(name = "people.service.update_person", skip(self, input), fields(person_id = %id))]
    pub async fn update_person(
        &self,
        id: Uuid,
        input: PersonInput,
    ) -> Result<UpdateOutcome, DomainError> {
        info!("Updating person");

        let (name, age, city) = self.validate_input(&input)?;

        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::person_not_found(id))?;

        if current.name == name && current.age == age && current.city == city {
            debug!("Submitted values identical to stored values");
            return Ok(UpdateOutcome::Unchanged(current));
        }

        let updated = Person {
            id,
            name,
            age,
            city,
            created_at: current.created_at,
            updated_at: Some(Utc::now()),
        };

        self.repo
            .update(updated.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated person");
        Ok(UpdateOutcome::Updated(updated))
    }

    /// Idempotent by id: deleting an absent id reports not-found and
    /// changes nothing.
    #[instrument(name = "people.service.delete_person", skip(self), fields(person_id = %id))]
    pub async fn delete_person(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting person");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::person_not_found(id));
        }

        info!("Successfully deleted person");
        Ok(())
    }

    // --- validation helpers ---

    /// Trim all fields, require presence, and parse the age into range.
    /// Nothing reaches the repository unless this passes.
    fn validate_input(&self, input: &PersonInput) -> Result<(String, i32, String), DomainError> {
        let name = input.name.trim();
        let age = input.age.trim();
        let city = input.city.trim();

        for (field, value) in [("name", name), ("age", age), ("city", city)] {
            if value.is_empty() {
                return Err(DomainError::validation(field, MSG_FIELDS_REQUIRED));
            }
        }

        let age: i32 = age
            .parse()
            .map_err(|_| DomainError::validation("age", MSG_AGE_RANGE))?;
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            return Err(DomainError::validation("age", MSG_AGE_RANGE));
        }

        Ok((name.to_string(), age, city.to_string()))
    }
}
