//! Re-exports the most commonly used types of the crate.

pub use crate::costing::{TransportClass, TransportSpec, TRANSPORT_CATALOG};
pub use crate::evaluation::{CostBreakdown, PlanEvaluation, PricingInputs, Route, INFEASIBLE_COST};
pub use crate::grouping::{group_shipments_by_delivery_day, DeliveryDay};
pub use crate::models::{
    Cost, Direction, Distance, DistanceMatrix, InterCityRate, IntraCityRate, Shipment, Terminal, HUB_CITY,
};
pub use crate::search::{CrossoverKind, GaSettings, Individual, MutationKind, SelectionKind};
pub use crate::solver::{solve_distribution_plan, PlanRequest, PlanSolution, PlanningData};
pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Quota, Random};
