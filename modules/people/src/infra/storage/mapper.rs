use crate::contract::model::Person;
use crate::infra::storage::entity::Model as PersonEntity;

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: PersonEntity) -> Person {
    Person {
        id: entity.id,
        name: entity.name,
        age: entity.age,
        city: entity.city,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}
