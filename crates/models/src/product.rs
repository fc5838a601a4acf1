use sea_orm::{entity::prelude::*, DatabaseConnection, Order, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Offset window of a listing query: 0-based row offset and row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    if model.name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        price: Set(model.price),
        created_at: Set(model.created_at),
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Products ordered by `created_at`; the whole table when `window` is `None`.
pub async fn list_by_created_at(
    db: &DatabaseConnection,
    order: Order,
    window: Option<Window>,
) -> Result<Vec<Model>, errors::ModelError> {
    let mut query = Entity::find().order_by(Column::CreatedAt, order);
    if let Some(w) = window {
        query = query.offset(w.offset).limit(w.limit);
    }
    Ok(query.all(db).await?)
}

/// Overwrite the mutable columns; `None` when the row does not exist.
pub async fn update_details(
    db: &DatabaseConnection,
    id: Uuid,
    name: &str,
    price: f64,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    am.price = Set(price);
    Ok(Some(am.update(db).await?))
}

/// Returns `false` when nothing was deleted.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
