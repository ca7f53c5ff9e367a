//! SeaORM-backed repository implementation for the domain port.
//!
//! This struct is generic over `C: ConnectionTrait`, so you can construct it
//! with a `DatabaseConnection` **or** a transactional connection.

use anyhow::Context;
use sea_orm::sea_query::{Condition, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::contract::model::Person;
use crate::domain::query::{SortField, SortOrder};
use crate::domain::repo::PeopleRepository;
use crate::infra::storage::entity::{ActiveModel as PersonAM, Column, Entity as PersonEntity};
use crate::infra::storage::mapper::entity_to_contract;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmPeopleRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPeopleRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

/// Case-insensitive unanchored substring match over name OR city.
/// `lower(col) LIKE '%…%'` behaves the same on SQLite and Postgres.
fn search_condition(search: &str) -> Condition {
    let pattern = format!("%{}%", search.to_lowercase());
    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern.clone()))
        .add(Expr::expr(Func::lower(Expr::col(Column::City))).like(pattern))
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Name => Column::Name,
        SortField::Age => Column::Age,
        SortField::City => Column::City,
    }
}

fn sort_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait::async_trait]
impl<C> PeopleRepository for SeaOrmPeopleRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Person>> {
        let found = PersonEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn insert(&self, p: Person) -> anyhow::Result<()> {
        let m = PersonAM {
            id: Set(p.id),
            name: Set(p.name),
            age: Set(p.age),
            city: Set(p.city),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        };
        let _ = m.insert(&self.conn).await.context("insert failed")?;
        Ok(())
    }

    async fn update(&self, p: Person) -> anyhow::Result<()> {
        let m = PersonAM {
            id: Set(p.id),
            name: Set(p.name),
            age: Set(p.age),
            city: Set(p.city),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        };
        let _ = m.update(&self.conn).await.context("update failed")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = PersonEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self, search: &str) -> anyhow::Result<u64> {
        let mut query = PersonEntity::find();
        if !search.is_empty() {
            query = query.filter(search_condition(search));
        }
        let total = query.count(&self.conn).await.context("count failed")?;
        Ok(total)
    }

    async fn list_page(
        &self,
        search: &str,
        sort_by: SortField,
        order: SortOrder,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<Person>> {
        let mut query = PersonEntity::find();
        if !search.is_empty() {
            query = query.filter(search_condition(search));
        }
        let rows = query
            .order_by(sort_column(sort_by), sort_order(order))
            .offset(offset)
            .limit(limit)
            .all(&self.conn)
            .await
            .context("list_page failed")?;
        Ok(rows.into_iter().map(entity_to_contract).collect())
    }
}
