use axum::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::{
    response::{IntoResponse, Response},
    Form, RequestExt,
};
use serde::Deserialize;
use validator::Validate;

use crate::middleware::error::ErrorResponseBody;

#[derive(Debug, Deserialize, Validate)]
pub struct TextValueInput {
    #[validate(length(max = 65536, message = "Text too long"))]
    pub textvalue: String,
}

/// Payload of `POST /cleaningdata`: either an annotated dataset file or a
/// single piece of raw text. A multipart body may carry both; the file wins,
/// matching how the upstream clients use the endpoint.
#[derive(Debug)]
pub enum CleaningInput {
    Dataset { file_name: String, bytes: Vec<u8> },
    Text { value: String },
}

#[async_trait]
impl<S> FromRequest<S> for CleaningInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type_header = req.headers().get(CONTENT_TYPE);
        let content_type = content_type_header
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart: Multipart =
                req.extract().await.map_err(IntoResponse::into_response)?;

            let mut text_value: Option<String> = None;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|err| bad_request(err.to_string()))?
            {
                match field.name() {
                    Some("file") => {
                        let file_name = field.file_name().unwrap_or("data.csv").to_string();
                        let bytes = field
                            .bytes()
                            .await
                            .map_err(|err| bad_request(err.to_string()))?;
                        return Ok(CleaningInput::Dataset {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                    Some("textvalue") => {
                        text_value = Some(
                            field
                                .text()
                                .await
                                .map_err(|err| bad_request(err.to_string()))?,
                        );
                    }
                    _ => {}
                }
            }

            if let Some(value) = text_value {
                let payload = TextValueInput { textvalue: value };
                payload
                    .validate()
                    .map_err(|err| bad_request(err.to_string()))?;
                return Ok(CleaningInput::Text {
                    value: payload.textvalue,
                });
            }

            return Err(bad_request(
                "multipart body needs a file or textvalue field".to_string(),
            ));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload): Form<TextValueInput> =
                req.extract().await.map_err(IntoResponse::into_response)?;
            payload
                .validate()
                .map_err(|err| bad_request(err.to_string()))?;
            return Ok(CleaningInput::Text {
                value: payload.textvalue,
            });
        }

        Err(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response())
    }
}

fn bad_request(error: String) -> Response {
    let body: String = ErrorResponseBody::new(error, None).into();
    (StatusCode::BAD_REQUEST, body).into_response()
}
