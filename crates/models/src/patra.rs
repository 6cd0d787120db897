use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::grahaka;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patra")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub image: String,
    pub document: Option<String>,
    pub tags: String,
    pub owner_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Owner }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Owner => Entity::belongs_to(grahaka::Entity).from(Column::OwnerId).to(grahaka::Column::Id).into() }
    }
}

impl Related<grahaka::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Document fields supplied by the caller; id and owner are assigned on insert.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewPatra {
    pub image: String,
    #[serde(default)]
    pub document: Option<String>,
    pub tags: String,
}

/// Accepts absolute http(s) URLs only.
pub fn validate_url(field: &str, value: &str) -> Result<(), ModelError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ModelError::Validation(format!("{field}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ModelError::Validation(format!("{field}: expected an http(s) URL")));
    }
    Ok(())
}

impl NewPatra {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_url("image", &self.image)?;
        if let Some(doc) = &self.document { validate_url("document", doc)?; }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, owner_id: i32, input: NewPatra) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        image: Set(input.image),
        document: Set(input.document),
        tags: Set(input.tags),
        owner_id: Set(owner_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
