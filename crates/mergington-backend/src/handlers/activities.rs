use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Deserialize;

use mergington::data::{Activity, ActivityDirectory, MessageResponse};
use mergington::log;

use super::ApiError;
use crate::services::ActivityService;

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

fn activity_param(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name)
        .map_err(|rejection| ApiError::InvalidPath(rejection.body_text()))
}

fn email_param(query: Result<Query<EmailParams>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(params)| params.email)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}

/// Handler to list every activity with its roster
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivityDirectory>, ApiError> {
    let directory = state.activities.list().await?;
    Ok(Json(directory))
}

/// Handler to get a single activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Activity>, ApiError> {
    let activity_name = activity_param(path)?;
    let activity = state.activities.get(&activity_name).await?;
    Ok(Json(activity))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_param(path)?;
    let email = email_param(query)?;

    match state.activities.signup(&activity_name, &email).await {
        Ok(response) => {
            log::info!("Signed up {} for {:?}", email, activity_name);
            Ok(Json(response))
        }
        Err(err) => {
            log::debug!("Signup of {} for {:?} rejected: {}", email, activity_name, err);
            Err(err.into())
        }
    }
}

/// Handler to remove a student from an activity
pub async fn withdraw(
    State(state): State<Arc<crate::AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_param(path)?;
    let email = email_param(query)?;

    match state.activities.withdraw(&activity_name, &email).await {
        Ok(response) => {
            log::info!("Removed {} from {:?}", email, activity_name);
            Ok(Json(response))
        }
        Err(err) => {
            log::debug!("Removal of {} from {:?} rejected: {}", email, activity_name, err);
            Err(err.into())
        }
    }
}
