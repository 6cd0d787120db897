use sea_orm::{DatabaseConnection, LoaderTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, instrument};

use models::{grahaka, patra};
use crate::auth::password;
use crate::{errors::ServiceError, pagination::Page};

/// Customer creation payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewGrahaka {
    pub email: String,
    pub password: String,
}

/// Read view of a customer: the row without its password hash, plus the
/// documents it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrahakaView {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub items: Vec<patra::Model>,
}

impl GrahakaView {
    pub fn new(g: grahaka::Model, items: Vec<patra::Model>) -> Self {
        Self { id: g.id, email: g.email, is_active: g.is_active, is_admin: false, items }
    }
}

/// Create a customer unless one with the same email exists.
///
/// The lookup and the insert share one transaction; the unique index on
/// `email` still decides concurrent creates, and its violation is reported as
/// the same `Conflict`.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_grahaka(db: &DatabaseConnection, input: NewGrahaka) -> Result<GrahakaView, ServiceError> {
    grahaka::validate_email(&input.email)?;
    if input.password.is_empty() {
        return Err(ServiceError::Validation("password required".into()));
    }

    let txn = db.begin().await?;
    if grahaka::find_by_email(&txn, &input.email).await?.is_some() {
        warn!("grahaka_create_conflict");
        return Err(ServiceError::Conflict(format!("grahaka with email {} already exists", input.email)));
    }
    let password_hashed = password::hash_password(&input.password)
        .map_err(|e| ServiceError::Hash(e.to_string()))?;
    let created = match grahaka::create(&txn, &input.email, &password_hashed).await {
        Ok(m) => m,
        Err(e) => {
            let err = ServiceError::from(e);
            if matches!(err, ServiceError::Conflict(_)) { warn!("grahaka_create_conflict_on_insert"); }
            return Err(err);
        }
    };
    txn.commit().await?;

    info!(grahaka_id = created.id, "grahaka_created");
    Ok(GrahakaView::new(created, Vec::new()))
}

/// Page of customers in insertion order, each with its documents.
pub async fn list_grahaka(db: &DatabaseConnection, page: Page) -> Result<Vec<GrahakaView>, ServiceError> {
    let rows = grahaka::list(db, page.skip, page.limit).await?;
    let items = rows.load_many(patra::Entity, db).await?;
    Ok(rows.into_iter().zip(items).map(|(g, i)| GrahakaView::new(g, i)).collect())
}

/// Customer by id; `NotFound` carries the requested id.
pub async fn get_grahaka(db: &DatabaseConnection, id: i32) -> Result<GrahakaView, ServiceError> {
    let found = grahaka::find_by_id(db, id).await?
        .ok_or_else(|| ServiceError::not_found("grahaka", id))?;
    let items = vec![found.clone()].load_many(patra::Entity, db).await?
        .pop()
        .unwrap_or_default();
    Ok(GrahakaView::new(found, items))
}
