use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        mail::{MailSentDto, SendMailDto},
    },
    server::{error::AppError, service::mail::MailService, state::AppState},
};

/// Tag for grouping mail endpoints in OpenAPI documentation
pub static MAIL_TAG: &str = "mail";

const MAIL_SENT: &str = "E-mail enviado com sucesso";

/// Send an e-mail from the configured sender.
///
/// The HTML body falls back to the plain text when `html` is omitted.
///
/// # Returns
/// - `200 OK` - Message accepted by the relay, with its message id
/// - `400 Bad Request` - One message per violated rule; nothing is sent
/// - `500 Internal Server Error` - The relay rejected the message or was unreachable
#[utoipa::path(
    post,
    path = "/mail/send",
    tag = MAIL_TAG,
    request_body = SendMailDto,
    responses(
        (status = 200, description = "E-mail sent", body = MailSentDto),
        (status = 400, description = "Invalid e-mail data", body = ErrorDto),
        (status = 500, description = "Delivery failed", body = ErrorDto)
    ),
)]
pub async fn send_mail(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let message_id = MailService::new(state.mailer.as_ref(), &state.mail_from)
        .send(&payload)
        .await?;

    Ok(Json(MailSentDto {
        message: MAIL_SENT.to_string(),
        message_id,
    }))
}
