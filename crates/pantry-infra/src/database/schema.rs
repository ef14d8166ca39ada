//! Idempotent startup schema creation.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::{beer, post, product, tea, user};

/// Create any entity tables that do not exist yet.
///
/// There is no migration mechanism: the schema is derived from the
/// entity definitions and issued as `CREATE TABLE IF NOT EXISTS`, so
/// startup is safe against an already-populated store.
pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema
            .create_table_from_entity(user::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(post::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(beer::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(tea::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(product::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in &statements {
        db.execute(backend.build(stmt)).await?;
    }

    tracing::info!("Database schema ensured ({} tables)", statements.len());
    Ok(())
}
