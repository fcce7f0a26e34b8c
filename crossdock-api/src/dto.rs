//! Wire formats of the api together with their mapping onto the engine types.

#[cfg(test)]
#[path = "../tests/unit/dto_test.rs"]
mod dto_test;

use chrono::Utc;
use crossdock_core::prelude::{
    CostBreakdown, CrossoverKind, MutationKind, PlanSolution, Route, SelectionKind, TransportClass,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub delivery_days: Vec<String>,
    #[serde(default)]
    pub ga_settings_level_1: Option<GaSettingsDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GaSettingsDto {
    #[serde(default)]
    pub num_generations: u32,
    #[serde(default)]
    pub num_individuals: u32,
    #[serde(default)]
    pub stopping_criterion: u32,
    #[serde(default)]
    pub selection_type: String,
    #[serde(default)]
    pub crossover_type: String,
    #[serde(default)]
    pub mutation_type: String,
}

pub const SELECTION_WIRE_VALUES: [(&str, SelectionKind); 3] = [
    ("SELECTION_TOURNAMENT", SelectionKind::Tournament),
    ("SELECTION_ROULETTE", SelectionKind::Roulette),
    ("SELECTION_RANK", SelectionKind::Rank),
];

pub const CROSSOVER_WIRE_VALUES: [(&str, CrossoverKind); 3] = [
    ("CROSSOVER_UNIFORM", CrossoverKind::Uniform),
    ("CROSSOVER_SINGLE_POINT", CrossoverKind::SinglePoint),
    ("CROSSOVER_TWO_POINT", CrossoverKind::TwoPoint),
];

pub const MUTATION_WIRE_VALUES: [(&str, MutationKind); 2] =
    [("MUTATION_INVERSION", MutationKind::Inversion), ("MUTATION_SWAP", MutationKind::Swap)];

pub fn parse_selection(value: &str) -> Option<SelectionKind> {
    SELECTION_WIRE_VALUES.into_iter().find(|(name, _)| *name == value).map(|(_, kind)| kind)
}

pub fn parse_crossover(value: &str) -> Option<CrossoverKind> {
    CROSSOVER_WIRE_VALUES.into_iter().find(|(name, _)| *name == value).map(|(_, kind)| kind)
}

pub fn parse_mutation(value: &str) -> Option<MutationKind> {
    MUTATION_WIRE_VALUES.into_iter().find(|(name, _)| *name == value).map(|(_, kind)| kind)
}

pub fn transport_wire_name(class: TransportClass) -> &'static str {
    match class {
        TransportClass::T1_5 => "TRANSPORT_1_5T_10M3",
        TransportClass::T3 => "TRANSPORT_3T_20M3",
        TransportClass::T5 => "TRANSPORT_5T_36M3",
        TransportClass::T10 => "TRANSPORT_10T_45M3",
        TransportClass::T20 => "TRANSPORT_20T_86M3",
    }
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<OptimizationResultDto>,
    pub solution_id: String,
    pub created_at: String,
}

impl OptimizeResponse {
    pub fn from_solution(solution: &PlanSolution) -> Self {
        Self {
            success: true,
            message: "Optimization completed successfully".to_string(),
            results: vec![OptimizationResultDto::from_solution(solution)],
            solution_id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OptimizationResultDto {
    pub routes: Vec<RouteDto>,
    pub cost: CostBreakdownDto,
    pub active_terminals: Vec<String>,
    pub generation: u32,
    pub fitness_score: f64,
}

impl OptimizationResultDto {
    fn from_solution(solution: &PlanSolution) -> Self {
        Self {
            routes: solution.routes.iter().map(RouteDto::from_route).collect(),
            cost: CostBreakdownDto::from_cost(&solution.cost),
            active_terminals: solution.active_terminals.clone(),
            generation: solution.generation,
            fitness_score: solution.fitness_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub from_city: String,
    pub to_terminal: String,
    pub shipment_ids: Vec<String>,
    pub cost: f64,
    pub transport_used: String,
}

impl RouteDto {
    fn from_route(route: &Route) -> Self {
        Self {
            from_city: route.from_city.clone(),
            to_terminal: route.to_terminal.clone(),
            shipment_ids: route.shipment_ids.clone(),
            cost: route.cost,
            transport_used: transport_wire_name(route.transport_used).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CostBreakdownDto {
    pub linehaul_cost: f64,
    pub last_mile_cost: f64,
    pub penalty_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdownDto {
    fn from_cost(cost: &CostBreakdown) -> Self {
        Self {
            linehaul_cost: cost.linehaul_cost,
            last_mile_cost: cost.last_mile_cost,
            penalty_cost: cost.penalty_cost,
            total_cost: cost.total_cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processed: Vec<FileResultDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileErrorDto>,
}

#[derive(Debug, Serialize)]
pub struct FileResultDto {
    pub name: String,
    pub size_bytes: i64,
    pub processed_at: String,
}

#[derive(Debug, Serialize)]
pub struct FileErrorDto {
    pub name: String,
    pub error: String,
}
