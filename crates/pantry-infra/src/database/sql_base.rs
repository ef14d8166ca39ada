use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, SqlErr, TransactionTrait,
};

use pantry_core::error::RepoError;
use pantry_core::ports::Repository;

/// Generic SQL repository implementation over a SeaORM entity.
///
/// One instance per entity table; all five share the connection pool.
pub struct SqlRepository<E>
where
    E: EntityTrait,
{
    db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqlRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, D> Repository<T, D> for SqlRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32> + PrimaryKeyToColumn<Column = E::Column>,
    T: From<E::Model> + Send + Sync + 'static,
    D: Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn insert(&self, draft: D) -> Result<T, RepoError> {
        let row: E::ActiveModel = draft.into();
        let model = row.insert(&self.db).await.map_err(classify)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        let found = E::find_by_id(id).one(&self.db).await.map_err(classify)?;

        Ok(found.map(Into::into))
    }

    async fn update(&self, id: i32, draft: D) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(classify)?;

        let existing = E::find_by_id(id).one(&txn).await.map_err(classify)?;
        if existing.is_none() {
            // Dropping the uncommitted transaction rolls it back.
            return Err(RepoError::NotFound);
        }

        let pk = E::PrimaryKey::iter()
            .next()
            .ok_or_else(|| RepoError::Query("entity has no primary key".to_string()))?;

        let mut row: E::ActiveModel = draft.into();
        row.set(pk.into_column(), id.into());
        row.update(&txn).await.map_err(classify)?;

        txn.commit().await.map_err(classify)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = E::delete_by_id(id).exec(&self.db).await.map_err(classify)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// Map a SeaORM error onto the repository taxonomy.
///
/// Unique violations must stay distinguishable from generic query
/// faults; `sql_err` classifies them for Postgres and SQLite alike, with
/// a message heuristic as fallback for drivers that report no code.
pub(crate) fn classify(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
        return RepoError::Constraint(msg);
    }

    let msg = err.to_string();
    let lowered = msg.to_lowercase();
    if lowered.contains("unique") || lowered.contains("duplicate") {
        return RepoError::Constraint(msg);
    }

    match err {
        // A row that vanished between lookup and write inside the update
        // transaction still counts as absent.
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
