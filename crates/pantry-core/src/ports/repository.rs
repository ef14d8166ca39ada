use async_trait::async_trait;

use crate::error::RepoError;

/// Generic repository trait defining the four operations every entity
/// table supports.
///
/// `T` is the persisted record; `D` is the draft carrying every mutable
/// field. An update replaces all of them - there is no partial patch.
#[async_trait]
pub trait Repository<T, D>: Send + Sync {
    /// Persist a new record and return it with its store-assigned id.
    async fn insert(&self, draft: D) -> Result<T, RepoError>;

    /// Find a record by its primary key. `None` means absent; store
    /// faults are `Err`.
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// Overwrite every mutable field of the record at `id`.
    ///
    /// Lookup and write happen in one transaction; `RepoError::NotFound`
    /// when the id is absent.
    async fn update(&self, id: i32, draft: D) -> Result<(), RepoError>;

    /// Delete the record at `id`. `RepoError::NotFound` when the id is
    /// absent.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
