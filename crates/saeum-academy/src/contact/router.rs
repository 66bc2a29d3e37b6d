use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use mime::Mime;
use tracing::error;

use super::domain::{ContactAck, ContactError, ContactSubmission, FILE_PART_VALUE};
use super::service::ContactIntake;

/// Router exposing the contact form endpoint.
pub fn contact_router(intake: ContactIntake) -> Router {
    Router::new()
        .route("/contact", post(submit_handler))
        .with_state(intake)
}

/// Every outcome, faults included, becomes a [`ContactAck`].
pub(crate) async fn submit_handler(
    State(intake): State<ContactIntake>,
    request: Request,
) -> Response {
    let outcome = match read_submission(request).await {
        Ok(submission) => intake.submit(submission),
        Err(err) => {
            error!(error = %err, "error processing contact form submission");
            Err(err)
        }
    };

    match outcome {
        Ok(_) => ContactAck::accepted().into_response(),
        Err(err) => ContactAck::from(&err).into_response(),
    }
}

/// Decodes a multipart or urlencoded body into a submission.
pub(crate) async fn read_submission(request: Request) -> Result<ContactSubmission, ContactError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ContactError::ProcessingFault("missing content type".to_string()))?;
    let mime: Mime = content_type.parse().map_err(|err: mime::FromStrError| {
        ContactError::ProcessingFault(format!("invalid content type '{content_type}': {err}"))
    })?;

    if mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA {
        read_multipart(request).await
    } else if mime.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
        let Form(fields) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(|rejection| ContactError::ProcessingFault(rejection.body_text()))?;
        Ok(ContactSubmission::from_fields(fields))
    } else {
        Err(ContactError::ProcessingFault(format!(
            "unsupported content type '{}'",
            mime.essence_str()
        )))
    }
}

async fn read_multipart(request: Request) -> Result<ContactSubmission, ContactError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| ContactError::ProcessingFault(rejection.body_text()))?;

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ContactError::ProcessingFault(err.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        // A file part still occupies its field, with a placeholder value.
        if field.file_name().is_some() {
            fields.push((name, FILE_PART_VALUE.to_string()));
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|err| ContactError::ProcessingFault(err.body_text()))?;
        fields.push((name, value));
    }

    Ok(ContactSubmission::from_fields(fields))
}
