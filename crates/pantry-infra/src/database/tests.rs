use std::sync::Arc;

use sea_orm::{DatabaseBackend, DbConn, MockDatabase};

use pantry_core::domain::{Beer, NewBeer, NewUser, User};
use pantry_core::error::RepoError;
use pantry_core::ports::Repository;

use crate::database::entity::beer;
use crate::database::sql_base::classify;
use crate::database::sql_repo::{SqlBeerRepository, SqlUserRepository};
use crate::database::{DatabaseConfig, connect, setup_schema};

fn beer_repo(db: DbConn) -> Arc<dyn Repository<Beer, NewBeer>> {
    Arc::new(SqlBeerRepository::new(db))
}

fn user_repo(db: DbConn) -> Arc<dyn Repository<User, NewUser>> {
    Arc::new(SqlUserRepository::new(db))
}

/// Fresh in-memory SQLite store with the schema applied. Pool capped at
/// one connection so every statement sees the same database.
async fn sqlite() -> DbConn {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config).await.expect("connect to in-memory sqlite");
    setup_schema(&db).await.expect("create schema");
    db
}

#[tokio::test]
async fn test_find_beer_by_id() {
    // Mock the query expectation
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![beer::Model {
            id: 7,
            style: "Ale".to_owned(),
            alcohol: 5.0,
            cereal: "barley malt".to_owned(),
        }]])
        .into_connection();

    let repo = beer_repo(db);

    let result = repo.find_by_id(7).await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, 7);
    assert_eq!(found.style, "Ale");
}

#[tokio::test]
async fn test_find_missing_beer_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<beer::Model>::new()])
        .into_connection();

    let repo = beer_repo(db);

    let result = repo.find_by_id(42).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_assigns_id() {
    let repo = beer_repo(sqlite().await);

    let created = repo
        .insert(NewBeer {
            style: "Ale".to_string(),
            alcohol: 5.0,
            cereal: "barley malt".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.style, "Ale");
    assert_eq!(created.alcohol, 5.0);
    assert_eq!(created.cereal, "barley malt");

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.style, "Ale");
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let repo = beer_repo(sqlite().await);

    let created = repo
        .insert(NewBeer {
            style: "Ale".to_string(),
            alcohol: 5.0,
            cereal: "barley malt".to_string(),
        })
        .await
        .unwrap();

    repo.update(
        created.id,
        NewBeer {
            style: "Lager".to_string(),
            alcohol: 4.2,
            cereal: "wheat".to_string(),
        },
    )
    .await
    .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.style, "Lager");
    assert_eq!(found.alcohol, 4.2);
    assert_eq!(found.cereal, "wheat");
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let repo = beer_repo(sqlite().await);

    let result = repo
        .update(
            99,
            NewBeer {
                style: "Lager".to_string(),
                alcohol: 4.2,
                cereal: "wheat".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_removes_row() {
    let repo = beer_repo(sqlite().await);

    let created = repo
        .insert(NewBeer {
            style: "Ale".to_string(),
            alcohol: 5.0,
            cereal: "barley malt".to_string(),
        })
        .await
        .unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    // A second delete addresses an absent row.
    let again = repo.delete(created.id).await;
    assert!(matches!(again, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_duplicate_username_is_a_constraint_violation() {
    let repo = user_repo(sqlite().await);

    repo.insert(NewUser {
        username: "albi".to_string(),
    })
    .await
    .unwrap();

    let second = repo
        .insert(NewUser {
            username: "albi".to_string(),
        })
        .await;

    assert!(matches!(second, Err(RepoError::Constraint(_))));
}

#[test]
fn test_classify_distinguishes_fault_kinds() {
    use sea_orm::{DbErr, RuntimeErr};

    let constraint = classify(DbErr::Query(RuntimeErr::Internal(
        "UNIQUE constraint failed: users.username".to_string(),
    )));
    assert!(matches!(constraint, RepoError::Constraint(_)));

    let gone = classify(DbErr::RecordNotUpdated);
    assert!(matches!(gone, RepoError::NotFound));

    let fault = classify(DbErr::Custom("boom".to_string()));
    assert!(matches!(fault, RepoError::Query(_)));
}
