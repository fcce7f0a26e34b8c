//! Request-scoped context: every request gets an id which is attached to log lines and to
//! error envelopes.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::HttpMessage;
use std::time::Instant;
use uuid::Uuid;

/// An unique id assigned to every incoming request.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

pub async fn request_context(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let method = req.method().clone();
    let path = req.path().to_string();
    tracing::info!(request_id = %request_id, method = %method, path = %path, "request started");

    let start = Instant::now();
    let response = next.call(req).await?;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request finished"
    );

    Ok(response)
}
