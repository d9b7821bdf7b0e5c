use std::collections::BTreeMap;

use axum::http::StatusCode;
use thiserror::Error;

use crate::models::Activity;
use crate::store::ActivityDirectory;

/// Why a signup or unregister was rejected. Translated to an HTTP status
/// only at the route boundary; the service layer never sees the transport.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp { .. } | SignupError::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// The full directory, as served by `GET /activities`. No filtering.
pub fn list_activities(directory: &ActivityDirectory) -> &BTreeMap<String, Activity> {
    directory.all()
}

/// Sign a student up for an activity. The email is appended at the end of
/// the roster; duplicates are rejected, capacity is not checked.
pub fn sign_up(
    directory: &mut ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(SignupError::AlreadySignedUp {
            email: email.to_string(),
            activity: activity_name.to_string(),
        });
    }

    activity.participants.push(email.to_string());
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove a student from an activity roster. Order of the remaining
/// entries is preserved.
pub fn unregister(
    directory: &mut ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let activity = directory
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(SignupError::NotSignedUp {
            email: email.to_string(),
            activity: activity_name.to_string(),
        });
    };

    activity.participants.remove(position);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
