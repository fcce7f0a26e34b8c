//! Per-request optimization orchestration: load the snapshot, run the engine on a worker
//! thread and surface the result.

use crate::errors::ApiError;
use crate::storage::PgStorage;
use crate::validation::ValidatedOptimizeRequest;
use actix_web::web;
use crossdock_core::prelude::{
    solve_distribution_plan, DefaultRandom, Environment, PlanRequest, PlanSolution, PlanningData,
};
use std::sync::Arc;

pub async fn run_optimization(
    storage: &PgStorage,
    request: ValidatedOptimizeRequest,
) -> Result<PlanSolution, ApiError> {
    let shipments = storage
        .fetch_shipments()
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: failed to load shipments: {err}")))?;
    let terminals = storage
        .fetch_terminals()
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: failed to load terminals: {err}")))?;
    let distances = storage
        .fetch_distances()
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: failed to load distances: {err}")))?;
    let inter_city_rates = storage
        .fetch_inter_city_rates()
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: failed to load inter-city rates: {err}")))?;
    let intra_city_rates = storage
        .fetch_intra_city_rates()
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: failed to load intra-city rates: {err}")))?;

    let data = PlanningData { shipments, terminals, distances, inter_city_rates, intra_city_rates };
    let plan_request = PlanRequest {
        direction: request.direction,
        delivery_days: request.delivery_days,
        ga_settings: request.ga_settings,
    };
    let environment = Environment::new(
        Arc::new(DefaultRandom::default()),
        None,
        Arc::new(|msg: &str| tracing::info!(target: "crossdock_core", "{msg}")),
    );

    // The search is CPU-bound and must not stall the async workers.
    web::block(move || solve_distribution_plan(&data, &plan_request, &environment))
        .await
        .map_err(|err| ApiError::internal(format!("optimization failed: {err}")))?
        .map_err(|err| ApiError::internal(format!("optimization failed: {err}")))
}
