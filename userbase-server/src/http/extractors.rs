//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, Json};
use serde::{Deserialize, Deserializer};

use super::error::ApiError;
use crate::models::User;

/// Extract a user id from the path, rejecting non-integers with 400
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: format!("invalid user id: {}", e.body_text()),
            })?;
        Ok(Self(id))
    }
}

/// Form fields as posted by an HTML form, where a blank id means "unset"
#[derive(Deserialize)]
struct UserForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    id: Option<i32>,
    firstname: String,
    lastname: String,
}

impl From<UserForm> for User {
    fn from(form: UserForm) -> Self {
        User::new(form.id, form.firstname, form.lastname)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// User body, decoded from JSON or from an urlencoded form
pub struct UserPayload(pub User);

impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let user = if is_form {
            let Form(form) = Form::<UserForm>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest {
                    message: e.body_text(),
                })?;
            User::from(form)
        } else {
            let Json(user) = Json::<User>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest {
                    message: e.body_text(),
                })?;
            user
        };

        Ok(Self(user))
    }
}
