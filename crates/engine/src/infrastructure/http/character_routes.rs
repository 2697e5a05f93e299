//! Character API routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use grimoire_domain::{Character, DomainError, Item};

use crate::api::http::ApiError;
use crate::app::App;
use crate::infrastructure::http::MessageResponse;
use crate::stores::CharacterPatch;

/// Request to create a character. Presence is validated in the handler.
#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub level: Option<i64>,
}

/// Request to update a character. Absent fields keep their current value;
/// a present empty string is applied as-is.
#[derive(Debug, Deserialize)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub level: Option<i64>,
}

/// Body for the assign/remove item endpoints.
#[derive(Debug, Deserialize)]
pub struct ItemIdRequest {
    #[serde(rename = "itemId")]
    pub item_id: Option<u64>,
}

/// Response for the assign/remove item endpoints: confirmation plus the
/// updated character.
#[derive(Debug, Serialize)]
pub struct CharacterActionResponse {
    pub message: String,
    pub character: Character,
}

/// An unparsable path id can never match a stored character.
fn parse_character_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| DomainError::CharacterNotFound.into())
}

/// List all characters
pub async fn list_characters(State(app): State<Arc<App>>) -> Json<Vec<Character>> {
    Json(app.characters.list().await)
}

/// Get a character by ID
pub async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = parse_character_id(&id)?;
    let character = app.characters.get(id).await?;
    Ok(Json(character))
}

/// Create a character
pub async fn create_character(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let name = req.name.filter(|n| !n.is_empty());
    let class_name = req.class_name.filter(|c| !c.is_empty());
    let (name, class_name, level) = match (name, class_name, req.level) {
        (Some(name), Some(class_name), Some(level)) => (name, class_name, level),
        _ => return Err(DomainError::validation("Name, class and level are required.").into()),
    };

    let character = app.characters.create(name, class_name, level).await;
    Ok((StatusCode::CREATED, Json(character)))
}

/// Update a character
pub async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCharacterRequest>,
) -> Result<Json<Character>, ApiError> {
    let id = parse_character_id(&id)?;
    let patch = CharacterPatch {
        name: req.name,
        class_name: req.class_name,
        level: req.level,
    };
    let character = app.characters.update(id, patch).await?;
    Ok(Json(character))
}

/// Delete a character
pub async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_character_id(&id)?;
    app.characters.delete(id).await?;
    Ok(Json(MessageResponse::new("Character removed successfully.")))
}

/// Assign an item to a character
pub async fn assign_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(req): Json<ItemIdRequest>,
) -> Result<Json<CharacterActionResponse>, ApiError> {
    let id = parse_character_id(&id)?;
    // A missing itemId matches nothing in the item store.
    let item_id = match req.item_id {
        Some(item_id) => item_id,
        None => {
            app.characters.get(id).await?;
            return Err(DomainError::ItemNotFound.into());
        }
    };

    let character = app.characters.assign_item(id, item_id).await?;
    Ok(Json(CharacterActionResponse {
        message: "Item assigned successfully.".to_string(),
        character,
    }))
}

/// Remove an item from a character
pub async fn remove_item(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(req): Json<ItemIdRequest>,
) -> Result<Json<CharacterActionResponse>, ApiError> {
    let id = parse_character_id(&id)?;
    // A missing itemId matches nothing in the inventory.
    let item_id = match req.item_id {
        Some(item_id) => item_id,
        None => {
            app.characters.get(id).await?;
            return Err(DomainError::ItemNotOnCharacter.into());
        }
    };

    let character = app.characters.remove_item(id, item_id).await?;
    Ok(Json(CharacterActionResponse {
        message: "Item removed successfully.".to_string(),
        character,
    }))
}

/// List a character's items
pub async fn list_character_items(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let id = parse_character_id(&id)?;
    let items = app.characters.list_items(id).await?;
    Ok(Json(items))
}

/// Find a character's first amulet
pub async fn find_amulet(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_character_id(&id)?;
    let amulet = app.characters.find_amulet(id).await?;
    Ok(Json(amulet))
}
