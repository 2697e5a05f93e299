//! Magic item API routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use grimoire_domain::{DomainError, Item};

use crate::api::http::ApiError;
use crate::app::App;
use crate::infrastructure::http::MessageResponse;
use crate::stores::ItemPatch;

/// Request to create an item. Presence is validated in the handler; the
/// optional `type` classifies the item (the amulet lookup matches on it).
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub power: Option<i64>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Request to update an item. Absent fields keep their current value; a
/// present empty string is applied as-is.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub power: Option<i64>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// An unparsable path id can never match a stored item.
fn parse_item_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| DomainError::ItemNotFound.into())
}

/// List all items
pub async fn list_items(State(app): State<Arc<App>>) -> Json<Vec<Item>> {
    Json(app.items.list().await)
}

/// Get an item by ID
pub async fn get_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    let item = app.items.get(id).await?;
    Ok(Json(item))
}

/// Create an item
pub async fn create_item(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let name = req.name.filter(|n| !n.is_empty());
    let (name, power) = match (name, req.power) {
        (Some(name), Some(power)) => (name, power),
        _ => return Err(DomainError::validation("Name and power are required.").into()),
    };

    let item = app.items.create(name, power, req.item_type).await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item
pub async fn update_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&id)?;
    let patch = ItemPatch {
        name: req.name,
        power: req.power,
        item_type: req.item_type,
    };
    let item = app.items.update(id, patch).await?;
    Ok(Json(item))
}

/// Delete an item
pub async fn delete_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_item_id(&id)?;
    app.items.delete(id).await?;
    Ok(Json(MessageResponse::new("Item removed successfully.")))
}
