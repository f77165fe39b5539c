//! Dashboard CRUD surface shared by every content type.
//!
//! ```text
//! GET    /api/{kind}                       -> { success, <items> }
//! POST   /api/{kind}        {..fields}     -> 201 { success, <item> }
//! PUT    /api/{kind}        {<item>Id, ..} -> { success, <item> }
//! PUT    /api/{kind}        {reorder: true, <item>Ids: [..]} -> { success, <items> }
//! DELETE /api/{kind}?id=..                 -> { success, message }
//! ```
//!
//! Reads are public; writes need an editor token.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rayob_core::content::ContentKind;
use rayob_core::document::validate::{reject_unknown_fields, validate_required_fields};
use rayob_core::document::{ItemId, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::Editor;
use crate::state::AppState;

pub fn routes<K: ContentKind>() -> Router<AppState> {
    Router::new().route(
        &format!("/api/{}", K::KEY),
        get(list::<K>)
            .post(create::<K>)
            .put(update::<K>)
            .delete(remove::<K>),
    )
}

#[derive(Debug, Deserialize)]
struct DeleteParams {
    id: Option<String>,
}

async fn list<K: ContentKind>(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let items = state.collection::<K>().get_all().await?;
    Ok(Json(success(K::ITEMS, &items)?))
}

async fn create<K: ContentKind>(
    State(state): State<AppState>,
    Editor(claims): Editor,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(body) = body?;
    let Value::Object(mut fields) = body else {
        return Err(ValidationError::NotAnObject.into());
    };
    // Ids and positions are assigned by the collection.
    fields.remove("id");
    fields.remove("order");
    validate_required_fields(&fields, K::REQUIRED)?;
    reject_unknown_fields(&fields, K::FIELDS)?;
    let fields: K::Fields = serde_json::from_value(Value::Object(fields))
        .map_err(|err| ValidationError::Malformed(err.to_string()))?;

    let item = state.collection::<K>().create(fields).await?;
    tracing::info!(collection = K::KEY, id = %item.id, user = %claims.sub, "item created");

    Ok((StatusCode::CREATED, Json(success(K::ITEM, &item)?)))
}

async fn update<K: ContentKind>(
    State(state): State<AppState>,
    Editor(claims): Editor,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body?;
    let Value::Object(mut fields) = body else {
        return Err(ValidationError::NotAnObject.into());
    };
    let repo = state.collection::<K>();

    if matches!(fields.remove("reorder"), Some(Value::Bool(true))) {
        let ids = take_ids(&fields, &K::ids_field())?;
        let items = repo.reorder(&ids).await?;
        tracing::info!(collection = K::KEY, user = %claims.sub, "items reordered");
        return Ok(Json(success(K::ITEMS, &items)?));
    }

    let id = take_id(&mut fields, &K::id_field())?;
    let item = repo.update(&id, fields).await?;
    tracing::info!(collection = K::KEY, %id, user = %claims.sub, "item updated");

    Ok(Json(success(K::ITEM, &item)?))
}

async fn remove<K: ContentKind>(
    State(state): State<AppState>,
    Editor(claims): Editor,
    params: Result<Query<DeleteParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let raw = params
        .id
        .ok_or_else(|| ValidationError::MissingField("id".to_string()))?;
    let id = parse_id("id", &raw)?;

    state.collection::<K>().delete(&id).await?;
    tracing::info!(collection = K::KEY, %id, user = %claims.sub, "item deleted");

    Ok(Json(json!({
        "success": true,
        "message": format!("{} deleted", K::ITEM),
    })))
}

/// Pull the child id out of an update body. Accepts `<item>Id` or plain `id`.
fn take_id(fields: &mut Map<String, Value>, id_field: &str) -> Result<ItemId, ValidationError> {
    let named = fields.remove(id_field);
    let plain = fields.remove("id");
    match named.or(plain) {
        Some(Value::String(raw)) => parse_id(id_field, &raw),
        Some(Value::Null) | None => Err(ValidationError::MissingField(id_field.to_string())),
        Some(_) => Err(ValidationError::invalid(id_field, "must be a string")),
    }
}

fn take_ids(fields: &Map<String, Value>, ids_field: &str) -> Result<Vec<ItemId>, ValidationError> {
    let Some(value) = fields.get(ids_field) else {
        return Err(ValidationError::MissingField(ids_field.to_string()));
    };
    let Value::Array(values) = value else {
        return Err(ValidationError::invalid(ids_field, "must be an array of ids"));
    };
    values
        .iter()
        .map(|value| match value {
            Value::String(raw) => parse_id(ids_field, raw),
            _ => Err(ValidationError::invalid(ids_field, "must be an array of ids")),
        })
        .collect()
}

fn parse_id(field: &str, raw: &str) -> Result<ItemId, ValidationError> {
    ItemId::parse(raw).map_err(|err| ValidationError::invalid(field, err.to_string()))
}

fn success(key: &str, payload: &impl Serialize) -> ApiResult<Value> {
    let payload = serde_json::to_value(payload)
        .map_err(|err| ApiError::Internal(format!("failed to encode {key}: {err}")))?;
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    body.insert(key.to_string(), payload);
    Ok(Value::Object(body))
}
