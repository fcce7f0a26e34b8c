//! The per-request planning entry point which ties the engine pieces together.

#[cfg(test)]
#[path = "../tests/unit/solver_test.rs"]
mod solver_test;

use crate::evaluation::{evaluate_fixed_terminals, CostBreakdown, PricingInputs, Route};
use crate::grouping::{group_shipments_by_delivery_day, DeliveryDay};
use crate::models::{Direction, Distance, DistanceMatrix, InterCityRate, IntraCityRate, Shipment, Terminal};
use crate::search::{run_terminal_search, GaSettings};
use crate::utils::{Environment, GenericResult};

/// A read-only snapshot of the five persistent datasets taken at request start.
#[derive(Clone, Debug)]
pub struct PlanningData {
    /// All known shipments.
    pub shipments: Vec<Shipment>,
    /// The candidate terminal catalog.
    pub terminals: Vec<Terminal>,
    /// The flat city-to-city distance list.
    pub distances: Vec<Distance>,
    /// Piecewise inter-city tariff table.
    pub inter_city_rates: Vec<InterCityRate>,
    /// Piecewise intra-city tariff table.
    pub intra_city_rates: Vec<IntraCityRate>,
}

/// One validated planning request.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    /// An optional corridor restricting the candidate terminals.
    pub direction: Option<Direction>,
    /// Exactly two delivery days partitioning the week.
    pub delivery_days: Vec<DeliveryDay>,
    /// Parameters of the terminal activation search.
    pub ga_settings: GaSettings,
}

/// The best plan found across the two delivery-day cohorts.
#[derive(Clone, Debug)]
pub struct PlanSolution {
    /// One route per terminal which received shipments.
    pub routes: Vec<Route>,
    /// Cost components of the plan.
    pub cost: CostBreakdown,
    /// Cities of the activated terminals.
    pub active_terminals: Vec<String>,
    /// The generation the solution was produced at.
    pub generation: u32,
    /// The plan quality, lower is better.
    pub fitness_score: f64,
}

/// Plans least-cost distribution for the given snapshot and request.
///
/// Shipments are partitioned into two delivery-day cohorts; each cohort is optimized
/// independently by the activation search, the winning terminal set is re-priced against the
/// fixed-terminal evaluator and the better of the two outcomes is returned. The fixed-terminal
/// pass is authoritative for the reported cost.
pub fn solve_distribution_plan(
    data: &PlanningData,
    request: &PlanRequest,
    environment: &Environment,
) -> GenericResult<PlanSolution> {
    let filtered_terminals = match request.direction {
        Some(direction) => {
            let filtered = data
                .terminals
                .iter()
                .filter(|terminal| terminal.direction == direction.as_str())
                .cloned()
                .collect::<Vec<_>>();
            if filtered.is_empty() {
                return Err(format!("no terminals found for direction: {}", direction.as_str()).into());
            }
            filtered
        }
        None => data.terminals.clone(),
    };

    let distances = DistanceMatrix::from_edges(&data.distances);
    let pricing = PricingInputs {
        inter_city_rates: &data.inter_city_rates,
        intra_city_rates: &data.intra_city_rates,
        distances: &distances,
    };

    let cohorts = group_shipments_by_delivery_day(&data.shipments, &request.delivery_days)?;

    let mut best: Option<PlanSolution> = None;

    for (delivery_day, day_shipments) in &cohorts {
        (environment.logger)(&format!(
            "optimizing delivery day {}: {} shipment(s), {} candidate terminal(s)",
            delivery_day.key(),
            day_shipments.len(),
            filtered_terminals.len()
        ));

        let winner =
            run_terminal_search(&request.ga_settings, &filtered_terminals, day_shipments, pricing, environment)?;

        // The search winner is re-priced against the fixed set of terminals it activated;
        // that second evaluation is the authoritative cost of the plan.
        let active_terminals = winner
            .evaluation
            .active_terminals
            .iter()
            .filter_map(|city| filtered_terminals.iter().find(|terminal| &terminal.city == city).cloned())
            .collect::<Vec<_>>();

        let evaluation = evaluate_fixed_terminals(&active_terminals, day_shipments, pricing)?;

        (environment.logger)(&format!(
            "delivery day {} evaluated: total cost {:.2}",
            delivery_day.key(),
            evaluation.cost.total_cost
        ));

        if best.as_ref().map_or(true, |solution| evaluation.fitness < solution.fitness_score) {
            best = Some(PlanSolution {
                routes: evaluation.routes,
                cost: evaluation.cost,
                active_terminals: evaluation.active_terminals,
                generation: 0,
                fitness_score: evaluation.fitness,
            });
        }
    }

    best.ok_or_else(|| "no valid result produced".into())
}
