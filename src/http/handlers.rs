use crate::core::service::ClassifierService;
use crate::utils::error::ClassifyError;
use actix_web::{web, HttpResponse};

/// POST /classify
///
/// The body is read as raw bytes so that a missing or wrong `Content-Type`
/// still goes through the same parsing and error envelope. Read failures
/// (over the size limit, broken stream) are reported the same way.
pub async fn classify(
    service: web::Data<ClassifierService>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ClassifyError> {
    let body = body.map_err(|e| ClassifyError::UnreadableBody {
        message: e.to_string(),
    })?;

    let prediction = service.classify(&body).inspect_err(|e| {
        tracing::debug!("Rejected classify request ({:?}): {}", e.kind(), e);
    })?;

    Ok(HttpResponse::Ok().json(prediction))
}
