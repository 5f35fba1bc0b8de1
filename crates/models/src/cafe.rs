use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ValidationError};

pub const REQUIRED: &str = "This field is required.";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cafe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Raw form body as posted to `/add`. Unchecked checkboxes are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeSubmission {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl FromIterator<(String, String)> for CafeSubmission {
    /// Builds a submission from raw form pairs. When a key repeats the last
    /// value wins; unknown keys such as `submit` are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut sub = CafeSubmission::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut sub.name,
                "map_url" => &mut sub.map_url,
                "img_url" => &mut sub.img_url,
                "location" => &mut sub.location,
                "seats" => &mut sub.seats,
                "has_toilet" => &mut sub.has_toilet,
                "has_wifi" => &mut sub.has_wifi,
                "has_sockets" => &mut sub.has_sockets,
                "can_take_calls" => &mut sub.can_take_calls,
                "coffee_price" => &mut sub.coffee_price,
                _ => continue,
            };
            *slot = Some(value);
        }
        sub
    }
}

/// A submission that passed validation; the only way to build a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Checkbox semantics: absent, `""` and `"false"` mean unchecked.
pub fn is_checked(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !(v.is_empty() || v.eq_ignore_ascii_case("false")),
    }
}

fn required(field: &'static str, value: Option<&str>, errors: &mut ValidationError) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => {
            errors.push(field, REQUIRED);
            String::new()
        }
    }
}

/// Presence-only validation. Values are kept verbatim; URLs, seat counts and
/// prices are never parsed.
pub fn validate(sub: &CafeSubmission) -> Result<NewCafe, ValidationError> {
    let mut errors = ValidationError::default();
    let cafe = NewCafe {
        name: required("name", sub.name.as_deref(), &mut errors),
        map_url: required("map_url", sub.map_url.as_deref(), &mut errors),
        img_url: required("img_url", sub.img_url.as_deref(), &mut errors),
        location: required("location", sub.location.as_deref(), &mut errors),
        seats: required("seats", sub.seats.as_deref(), &mut errors),
        has_toilet: is_checked(sub.has_toilet.as_deref()),
        has_wifi: is_checked(sub.has_wifi.as_deref()),
        has_sockets: is_checked(sub.has_sockets.as_deref()),
        can_take_calls: is_checked(sub.can_take_calls.as_deref()),
        coffee_price: sub
            .coffee_price
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string),
    };
    if errors.is_empty() { Ok(cafe) } else { Err(errors) }
}

fn insert_error(e: DbErr, name: &str) -> ModelError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ModelError::DuplicateName(name.to_string()),
        _ => ModelError::Db(e.to_string()),
    }
}

pub async fn create(db: &DatabaseConnection, cafe: NewCafe) -> Result<Model, ModelError> {
    let name = cafe.name.clone();
    let am = ActiveModel {
        id: NotSet,
        name: Set(cafe.name),
        map_url: Set(cafe.map_url),
        img_url: Set(cafe.img_url),
        location: Set(cafe.location),
        seats: Set(cafe.seats),
        has_toilet: Set(cafe.has_toilet),
        has_wifi: Set(cafe.has_wifi),
        has_sockets: Set(cafe.has_sockets),
        can_take_calls: Set(cafe.can_take_calls),
        coffee_price: Set(cafe.coffee_price),
    };
    am.insert(db).await.map_err(|e| insert_error(e, &name))
}

/// All cafés in insertion order.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn fetch(db: &DatabaseConnection, id: i32) -> Result<Model, ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or(ModelError::NotFound(id))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(id));
    }
    Ok(())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Entity::find().count(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
