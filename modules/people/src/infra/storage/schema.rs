use anyhow::{Context, Result};
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::infra::storage::entity::{Column, Entity};

/// Create the people table and its supporting indexes if they do not
/// already exist. Safe to run on every startup.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(Entity);
    table.if_not_exists();
    db.execute(backend.build(&table))
        .await
        .context("create people table")?;

    for (name, column) in [
        ("idx_people_name", Column::Name),
        ("idx_people_city", Column::City),
    ] {
        let index = Index::create()
            .if_not_exists()
            .name(name)
            .table(Entity)
            .col(column)
            .to_owned();
        db.execute(backend.build(&index))
            .await
            .with_context(|| format!("create index {name}"))?;
    }

    Ok(())
}
