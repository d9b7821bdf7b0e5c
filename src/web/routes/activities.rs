use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::services::signup_service::{self, SignupError};
use crate::store::SharedDirectory;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    let dir = directory.read().await;
    Json(signup_service::list_activities(&dir).clone())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut dir = directory.write().await;
    signup_service::sign_up(&mut dir, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            reject(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut dir = directory.write().await;
    signup_service::unregister(&mut dir, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            reject(e)
        })
}

fn reject(e: SignupError) -> (StatusCode, Json<Value>) {
    (e.status(), Json(json!({ "detail": e.to_string() })))
}
