//! Assignment-and-costing evaluation of a fixed set of active terminals.

#[cfg(test)]
#[path = "../../tests/unit/evaluation/evaluator_test.rs"]
mod evaluator_test;

use crate::costing::{last_mile_cost, linehaul_cost, select_transport, TransportClass};
use crate::models::{Cost, DistanceMatrix, InterCityRate, IntraCityRate, Shipment, Terminal, HUB_CITY};
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// A sentinel cost assigned to plans with no usable terminals.
pub const INFEASIBLE_COST: Cost = 1e12;

/// A penalty charged for every shipment no active terminal can reach.
const UNREACHABLE_PENALTY: Cost = 1e9;

/// Read-only pricing inputs shared by all evaluations of one optimization run.
#[derive(Clone, Copy)]
pub struct PricingInputs<'a> {
    /// Piecewise inter-city tariff table.
    pub inter_city_rates: &'a [InterCityRate],
    /// Piecewise intra-city tariff table.
    pub intra_city_rates: &'a [IntraCityRate],
    /// The pivoted distance matrix.
    pub distances: &'a DistanceMatrix,
}

/// Controls what happens when no active terminal has a distance to a shipment's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnreachablePolicy {
    /// Charge a large penalty, drop the shipment and keep going. Keeps the search continuous
    /// while an activation mask is still being explored.
    Penalize,
    /// Fail the whole evaluation. Used when the terminal set is already fixed and expected
    /// to be feasible.
    Fail,
}

/// Cost components of one evaluated plan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    /// Total cost of hub-to-terminal legs.
    pub linehaul_cost: Cost,
    /// Total cost of terminal-to-destination distribution.
    pub last_mile_cost: Cost,
    /// Accumulated shaping penalties.
    pub penalty_cost: Cost,
    /// Sum of the three components, or the infeasibility sentinel.
    pub total_cost: Cost,
}

/// A planned hub-to-terminal route together with the shipments consolidated on it.
#[derive(Clone, Debug)]
pub struct Route {
    /// An origin city, always the central hub.
    pub from_city: String,
    /// A terminal city the route ends at.
    pub to_terminal: String,
    /// Ids of shipments dispatched through the terminal.
    pub shipment_ids: Vec<String>,
    /// A per-route cost. Not populated at reporting time: last-mile pricing is aggregated
    /// per terminal and is not split back to routes.
    pub cost: Cost,
    /// The vehicle class chosen for the consolidated load.
    pub transport_used: TransportClass,
}

/// The outcome of evaluating one terminal set against one day's shipments.
#[derive(Clone, Debug, Default)]
pub struct PlanEvaluation {
    /// The plan quality, lower is better. Equals the total cost.
    pub fitness: f64,
    /// Cost components of the plan.
    pub cost: CostBreakdown,
    /// Cities of the terminals the plan activates.
    pub active_terminals: Vec<String>,
    /// One route per terminal which received shipments.
    pub routes: Vec<Route>,
}

impl PlanEvaluation {
    /// Creates the sentinel evaluation of a plan with no usable terminals.
    pub fn infeasible() -> Self {
        Self {
            fitness: INFEASIBLE_COST,
            cost: CostBreakdown { total_cost: INFEASIBLE_COST, ..CostBreakdown::default() },
            ..Self::default()
        }
    }
}

/// Evaluates a fixed set of active terminals. Any shipment no terminal can reach fails the
/// evaluation.
pub fn evaluate_fixed_terminals(
    active_terminals: &[Terminal],
    shipments: &[Shipment],
    pricing: PricingInputs,
) -> GenericResult<PlanEvaluation> {
    if active_terminals.is_empty() {
        return Ok(PlanEvaluation::infeasible());
    }

    evaluate(active_terminals, shipments, pricing, UnreachablePolicy::Fail)
}

/// Evaluates the terminal subset selected by an activation mask. Unreachable shipments are
/// dropped under a penalty so that the surrounding search stays well-behaved.
pub fn evaluate_activation_mask(
    terminal_mask: &[bool],
    all_terminals: &[Terminal],
    shipments: &[Shipment],
    pricing: PricingInputs,
) -> GenericResult<PlanEvaluation> {
    let active_terminals = terminal_mask
        .iter()
        .zip(all_terminals.iter())
        .filter_map(|(active, terminal)| active.then(|| terminal.clone()))
        .collect::<Vec<_>>();

    if active_terminals.is_empty() {
        return Ok(PlanEvaluation::infeasible());
    }

    evaluate(&active_terminals, shipments, pricing, UnreachablePolicy::Penalize)
}

/// Shipments consolidated on one terminal.
struct TerminalGroup {
    city: String,
    shipments: Vec<Shipment>,
}

fn evaluate(
    active_terminals: &[Terminal],
    shipments: &[Shipment],
    pricing: PricingInputs,
    policy: UnreachablePolicy,
) -> GenericResult<PlanEvaluation> {
    let mut penalty = 0.;

    // Dispatch every shipment to the nearest active terminal; ties keep the first terminal
    // in activation order. Groups follow first-assignment order to keep runs reproducible.
    let mut groups: Vec<TerminalGroup> = Vec::new();
    let mut group_index: FxHashMap<String, usize> = FxHashMap::default();

    for shipment in shipments {
        let mut nearest: Option<(i32, &str)> = None;
        for terminal in active_terminals {
            if let Some(km) = pricing.distances.km(&terminal.city, &shipment.destination_city) {
                if nearest.map_or(true, |(best_km, _)| km < best_km) {
                    nearest = Some((km, terminal.city.as_str()));
                }
            }
        }

        match nearest {
            Some((_, city)) => {
                let index = match group_index.get(city) {
                    Some(&index) => index,
                    None => {
                        groups.push(TerminalGroup { city: city.to_string(), shipments: Vec::new() });
                        group_index.insert(city.to_string(), groups.len() - 1);
                        groups.len() - 1
                    }
                };
                groups[index].shipments.push(shipment.clone());
            }
            None => match policy {
                UnreachablePolicy::Penalize => penalty += UNREACHABLE_PENALTY,
                UnreachablePolicy::Fail => {
                    return Err(format!("no terminal covers destination {}", shipment.destination_city).into())
                }
            },
        }
    }

    let mut total_last_mile = 0.;
    for group in &groups {
        total_last_mile += last_mile_cost(
            &group.shipments,
            &group.city,
            pricing.inter_city_rates,
            pricing.intra_city_rates,
            pricing.distances.row(&group.city),
        )?;
    }

    // Every active terminal is served by a line-haul leg, whether or not it received shipments.
    let mut total_linehaul = 0.;
    for terminal in active_terminals {
        total_linehaul += linehaul_cost(terminal, active_terminals, pricing.inter_city_rates)?;
    }

    let mut routes = Vec::with_capacity(groups.len());
    for group in &groups {
        let total_weight_tons: f64 = group.shipments.iter().map(Shipment::weight_tons).sum();
        let total_volume_m3: f64 = group.shipments.iter().map(|shipment| shipment.volume_m3).sum();

        let choice = select_transport(total_weight_tons, total_volume_m3);
        penalty += choice.penalty;

        routes.push(Route {
            from_city: HUB_CITY.to_string(),
            to_terminal: group.city.clone(),
            shipment_ids: group.shipments.iter().map(|shipment| shipment.id.clone()).collect(),
            cost: 0.,
            transport_used: choice.class,
        });
    }

    let total_cost = total_linehaul + total_last_mile + penalty;

    Ok(PlanEvaluation {
        fitness: total_cost,
        cost: CostBreakdown {
            linehaul_cost: total_linehaul,
            last_mile_cost: total_last_mile,
            penalty_cost: penalty,
            total_cost,
        },
        active_terminals: active_terminals.iter().map(|terminal| terminal.city.clone()).collect(),
        routes,
    })
}
