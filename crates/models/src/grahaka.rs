use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, QuerySelect, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::patra;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grahaka")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hashed: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Patra,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Patra => Entity::has_many(patra::Entity).into() }
    }
}

impl Related<patra::Entity> for Entity {
    fn to() -> RelationDef { Relation::Patra.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation(format!("invalid email: {email}"));
    if email.len() > 255 || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

/// Insert a customer. The password must already be hashed.
pub async fn create<C: ConnectionTrait>(db: &C, email: &str, password_hashed: &str) -> Result<Model, ModelError> {
    validate_email(email)?;
    if password_hashed.is_empty() { return Err(ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        email: Set(email.to_string()),
        password_hashed: Set(password_hashed.to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

/// Page of customers in insertion order.
///
/// Drivers bind `OFFSET`/`LIMIT` as signed 64-bit integers, so larger values
/// are clamped to `i64::MAX`.
pub async fn list<C: ConnectionTrait>(db: &C, skip: u64, limit: u64) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .offset(clamp_to_i64(skip))
        .limit(clamp_to_i64(limit))
        .all(db)
        .await?)
}

fn clamp_to_i64(n: u64) -> u64 {
    n.min(i64::MAX as u64)
}
