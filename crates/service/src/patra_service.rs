use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use models::{grahaka, patra};
use crate::errors::ServiceError;

pub use models::patra::NewPatra;

/// Create a document owned by `owner_id`.
///
/// The owner is looked up first so a missing customer is a `NotFound` on every
/// backend; the FK constraint covers an owner deleted in between.
pub async fn create_patra_for_grahaka(db: &DatabaseConnection, owner_id: i32, input: NewPatra) -> Result<patra::Model, ServiceError> {
    input.validate()?;
    if grahaka::find_by_id(db, owner_id).await?.is_none() {
        warn!(owner_id, "patra_owner_missing");
        return Err(ServiceError::not_found("grahaka", owner_id));
    }
    let created = patra::create(db, owner_id, input).await.map_err(|e| match ServiceError::from(e) {
        ServiceError::NotFound(_) => ServiceError::not_found("grahaka", owner_id),
        other => other,
    })?;
    info!(patra_id = created.id, owner_id, "patra_created");
    Ok(created)
}

/// Every document across all customers.
pub async fn list_patra(db: &DatabaseConnection) -> Result<Vec<patra::Model>, ServiceError> {
    Ok(patra::list_all(db).await?)
}

pub async fn get_patra(db: &DatabaseConnection, id: i32) -> Result<patra::Model, ServiceError> {
    patra::find_by_id(db, id).await?.ok_or_else(|| ServiceError::not_found("patra", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn doc(tags: &str) -> NewPatra {
        NewPatra { image: "https://img.example.com/scan.png".into(), document: Some("https://docs.example.com/scan.pdf".into()), tags: tags.into() }
    }

    #[tokio::test]
    async fn created_document_belongs_to_owner() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let g = grahaka::create(&db, "a@x.com", "hash").await?;
        let p = create_patra_for_grahaka(&db, g.id, doc("kyc")).await?;
        assert_eq!(p.owner_id, g.id);
        assert_eq!(p.tags, "kyc");
        assert_eq!(get_patra(&db, p.id).await?, p);
        Ok(())
    }

    #[tokio::test]
    async fn list_spans_all_owners() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = grahaka::create(&db, "a@x.com", "hash").await?;
        let b = grahaka::create(&db, "b@x.com", "hash").await?;
        let pa = create_patra_for_grahaka(&db, a.id, doc("a")).await?;
        let pb = create_patra_for_grahaka(&db, b.id, doc("b")).await?;

        let all = list_patra(&db).await?;
        assert_eq!(all.len(), 2);
        assert!(all.contains(&pa));
        assert!(all.contains(&pb));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        match create_patra_for_grahaka(&db, 12, doc("x")).await {
            Err(ServiceError::NotFound(msg)) => assert!(msg.contains("12")),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(list_patra(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_document_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(get_patra(&db, 3).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
