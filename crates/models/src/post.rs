use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::{FieldErrors, ModelError};

pub const TITLE_MAX_CHARS: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps timestamps and refuses to persist a title that would break the
    /// non-empty invariant, whichever code path issued the save.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let sea_orm::ActiveValue::Set(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DbErr::Custom("posts.title must not be empty".into()));
            }
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Validate a raw title coming from a request body.
///
/// Surrounding whitespace is trimmed and the trimmed value is returned; that is
/// what gets stored. `None` stands for a missing (or `null`) field.
pub fn validate_title(raw: Option<&str>) -> Result<String, ModelError> {
    let title = raw.map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ModelError::Validation(FieldErrors::single(
            "title",
            "The title field is required.",
        )));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ModelError::Validation(FieldErrors::single(
            "title",
            format!("The title may not be greater than {TITLE_MAX_CHARS} characters."),
        )));
    }
    Ok(title.to_string())
}

pub async fn create(db: &DatabaseConnection, title: &str) -> Result<Model, ModelError> {
    let title = validate_title(Some(title))?;
    let am = ActiveModel {
        title: Set(title),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Replace the title; `Ok(None)` when no post has this id.
pub async fn set_title(db: &DatabaseConnection, id: i32, title: &str) -> Result<Option<Model>, ModelError> {
    let title = validate_title(Some(title))?;
    let Some(found) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.title = Set(title);
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
