use crate::dto::{OptimizeRequest, OptimizeResponse};
use crate::errors::{render_error, ApiError};
use crate::service::run_optimization;
use crate::storage::PgStorage;
use crate::validation::validate_optimize_request;
use actix_web::{post, web, HttpRequest, HttpResponse};

#[post("/optimize")]
pub async fn optimize(req: HttpRequest, body: web::Bytes, storage: web::Data<PgStorage>) -> HttpResponse {
    let request: OptimizeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return render_error(&req, &ApiError::bad_request("invalid JSON in request body")),
    };

    let validated = match validate_optimize_request(&request) {
        Ok(validated) => validated,
        Err(details) => return render_error(&req, &ApiError::invalid_arguments(details)),
    };

    tracing::info!(
        direction = validated.direction.map(|direction| direction.as_str()).unwrap_or(""),
        delivery_days = ?validated.delivery_days.iter().map(|day| day.key()).collect::<Vec<_>>(),
        "starting optimization request"
    );

    match run_optimization(storage.get_ref(), validated).await {
        Ok(solution) => {
            tracing::info!(best_total_cost = solution.cost.total_cost, "optimization completed successfully");
            HttpResponse::Ok().json(OptimizeResponse::from_solution(&solution))
        }
        Err(error) => render_error(&req, &error),
    }
}
