use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::application::services::{ReplyStatus, StoredUpload};
use crate::domain::{Attachment, StoragePath};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ChatbotResponse {
    pub response: String,
    pub r#type: String,
    pub has_file: bool,
}

/// Normalized chat request, resolved once at entry regardless of how the
/// client encoded it.
struct ParsedChatRequest {
    message: String,
    upload: Option<UploadPart>,
}

struct UploadPart {
    filename: String,
    content_type: String,
    data: Bytes,
}

#[derive(Deserialize)]
struct JsonMessageBody {
    #[serde(default)]
    message: String,
}

const JSON_BODY_ADVISORY: &str = "Please provide a message in JSON format.";
const EMPTY_REQUEST_ADVISORY: &str = "Please enter a message or upload a file.";

/// The chatbot orchestrator: parse → validate presence → persist & validate
/// file → dispatch to the chat service → clean up → respond. The staged
/// upload is deleted on every exit path that wrote it.
#[tracing::instrument(skip(state, request))]
pub async fn chatbot_handler(State(state): State<AppState>, request: Request) -> Response {
    let parsed = match parse_chat_request(request).await {
        Ok(parsed) => parsed,
        Err(advisory) => {
            tracing::warn!(advisory = %advisory, "Failed to parse chat request");
            return rejection(&advisory);
        }
    };

    tracing::debug!(message = %sanitize_prompt(&parsed.message), "Processing chat request");

    if parsed.message.is_empty() && parsed.upload.is_none() {
        return rejection(EMPTY_REQUEST_ADVISORY);
    }

    let mut staged: Option<(StoragePath, StoredUpload)> = None;
    if let Some(part) = parsed.upload {
        if let Err(rejected) = state.upload_policy.check_filename(&part.filename) {
            tracing::warn!(filename = %part.filename, "Rejected upload by extension");
            return rejection(&rejected.to_string());
        }

        let path = StoragePath::for_upload(&part.filename);
        let size = match state.staging_store.store(&path, part.data.clone()).await {
            Ok(size) => size,
            Err(e) => {
                tracing::error!(error = %e, "Failed to stage upload");
                cleanup(&state, &path).await;
                return server_error(&e.to_string());
            }
        };

        if let Err(rejected) = state.upload_policy.check_size(size) {
            tracing::warn!(filename = %part.filename, size, "Rejected upload by size");
            cleanup(&state, &path).await;
            return rejection(&rejected.to_string());
        }

        let attachment = Attachment::new(part.filename, &part.content_type, size);
        staged = Some((
            path,
            StoredUpload {
                attachment,
                data: part.data,
            },
        ));
    }

    let has_file = staged.is_some();
    let reply = state
        .chat_service
        .respond(&parsed.message, staged.as_ref().map(|(_, upload)| upload))
        .await;

    if let Some((path, _)) = &staged {
        cleanup(&state, path).await;
    }

    let body = ChatbotResponse {
        response: reply.text,
        r#type: match reply.status {
            ReplyStatus::Success => "success".to_string(),
            ReplyStatus::Degraded => "error".to_string(),
        },
        has_file,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Resolves the request encoding once: JSON body, multipart form, or — when
/// the content type is indeterminate — urlencoded form fields.
async fn parse_chat_request(request: Request) -> Result<ParsedChatRequest, String> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.contains("application/json") {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .map_err(|_| JSON_BODY_ADVISORY.to_string())?;
        let body: JsonMessageBody =
            serde_json::from_slice(&bytes).map_err(|_| JSON_BODY_ADVISORY.to_string())?;
        Ok(ParsedChatRequest {
            message: body.message.trim().to_string(),
            upload: None,
        })
    } else if content_type.contains("multipart/form-data") {
        parse_multipart(request).await
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        let fields: Vec<(String, String)> =
            serde_urlencoded::from_bytes(&bytes).unwrap_or_default();
        let message = fields
            .into_iter()
            .find(|(key, _)| key == "message")
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default();
        Ok(ParsedChatRequest {
            message,
            upload: None,
        })
    }
}

async fn parse_multipart(request: Request) -> Result<ParsedChatRequest, String> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| format!("Failed to read multipart: {e}"))?;

    let mut message = String::new();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read multipart: {e}"))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("message") => {
                message = field.text().await.unwrap_or_default().trim().to_string();
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file: {e}"))?;
                // A file input submitted empty arrives as a part with no
                // filename; treat it as absent.
                if !filename.is_empty() {
                    upload = Some(UploadPart {
                        filename,
                        content_type,
                        data,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(ParsedChatRequest { message, upload })
}

async fn cleanup(state: &AppState, path: &StoragePath) {
    if let Err(e) = state.staging_store.delete(path).await {
        tracing::warn!(path = %path, error = %e, "Failed to clean up staged upload");
    }
}

fn rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ChatbotResponse {
            response: message.to_string(),
            r#type: "error".to_string(),
            has_file: false,
        }),
    )
        .into_response()
}

fn server_error(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatbotResponse {
            response: format!("An error occurred: {detail}"),
            r#type: "error".to_string(),
            has_file: false,
        }),
    )
        .into_response()
}
