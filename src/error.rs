use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use awc::error::{JsonPayloadError as ClientJsonPayloadError, SendRequestError};
use derivative::Derivative;
use serde::{Serialize, Serializer};

use crate::campaign::form::FormViolation;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),
    InvalidCampaign {
        violations: Vec<FormViolation>,
    },
    InvalidFilterDate {
        field: &'static str,
        value: String,
    },

    // 404
    PathNotFound,

    // 502
    UserFetchFailed {
        status: u16,
    },
    #[serde(serialize_with = "display")]
    UserRequestFailed(#[derivative(PartialEq = "ignore")] SendRequestError),
    #[serde(serialize_with = "display")]
    UserPayloadInvalid(#[derivative(PartialEq = "ignore")] ClientJsonPayloadError),

    // 500
    InvalidConfig {
        key: &'static str,
        reason: &'static str,
    },
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidPath(_) => "E4001001",
            Error::InvalidQuery(_) => "E4001002",
            Error::InvalidCampaign { .. } => "E4001003",
            Error::InvalidFilterDate { .. } => "E4001004",
            Error::PathNotFound => "E4041000",
            Error::UserFetchFailed { .. } => "E5021000",
            Error::UserRequestFailed(_) => "E5021001",
            Error::UserPayloadInvalid(_) => "E5021002",
            Error::InvalidConfig { .. } => "E5001000",
            Error::IoError(_) => "E5001001",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::InvalidCampaign { .. } => "The given campaign failed validation",
            Error::InvalidFilterDate { .. } => "The given filter date could not be parsed",
            Error::PathNotFound => "The requested path does not exist",
            Error::UserFetchFailed { .. } => "Failed to fetch users",
            Error::UserRequestFailed(_) => "An error occurred when contacting the user api",
            Error::UserPayloadInvalid(_) => "The user api returned an unreadable payload",
            Error::InvalidConfig { .. } => "The service configuration is invalid",
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::InvalidCampaign { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidFilterDate { .. } => StatusCode::BAD_REQUEST,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::UserFetchFailed { .. } => StatusCode::BAD_GATEWAY,
            Error::UserRequestFailed(_) => StatusCode::BAD_GATEWAY,
            Error::UserPayloadInvalid(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<SendRequestError> for Error {
    fn from(error: SendRequestError) -> Error {
        Error::UserRequestFailed(error)
    }
}

impl From<ClientJsonPayloadError> for Error {
    fn from(error: ClientJsonPayloadError) -> Error {
        Error::UserPayloadInvalid(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_response_carries_code_message_and_meta() {
        let error = Error::InvalidFilterDate {
            field: "start_date",
            value: "13/45/2024".to_string(),
        };

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error_code"], "E4001004");
        assert_eq!(
            json["error_message"],
            "The given filter date could not be parsed"
        );
        assert_eq!(json["error_meta"]["field"], "start_date");
        assert_eq!(json["error_meta"]["value"], "13/45/2024");
    }

    #[test]
    fn user_api_failures_map_to_bad_gateway() {
        assert_eq!(
            Error::UserFetchFailed { status: 500 }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            Error::from(SendRequestError::Timeout).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
