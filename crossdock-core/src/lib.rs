//! This crate implements a two-level optimization engine which plans least-cost distribution of
//! cargo shipments from a central hub through a set of regional cross-dock terminals.
//!
//! The outer level runs a genetic search over the binary activation mask of candidate terminals.
//! The fitness of every mask is computed by an inner assignment-and-costing routine which
//! dispatches each shipment to its nearest active terminal, chooses a vehicle class per terminal
//! group and prices the line-haul, last-mile and penalty components of the plan.
//!
//! # Examples
//!
//! ```
//! use crossdock_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let data = PlanningData {
//!     shipments: vec![Shipment {
//!         id: "SHP-1".to_string(),
//!         weight_kg: 1000.,
//!         volume_m3: 2.,
//!         destination_city: "Тверь".to_string(),
//!         date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
//!     }],
//!     terminals: vec![Terminal {
//!         city: "Тверь".to_string(),
//!         direction: "Северо-Запад".to_string(),
//!         distance_from_moscow_km: 180,
//!     }],
//!     distances: vec![Distance { from_city: "Тверь".to_string(), to_city: "Тверь".to_string(), km: 0 }],
//!     inter_city_rates: vec![InterCityRate { volume_m3: 10., weight_tons: 1.5, rate_per_km: 30. }],
//!     intra_city_rates: vec![IntraCityRate { volume_m3: 10., weight_tons: 1.5, rate_fixed: 2000. }],
//! };
//!
//! let request = PlanRequest {
//!     direction: None,
//!     delivery_days: vec![DeliveryDay::Mon, DeliveryDay::Fri],
//!     ga_settings: GaSettings {
//!         num_generations: 50,
//!         num_individuals: 32,
//!         stopping_criterion: 5,
//!         selection: SelectionKind::Tournament,
//!         crossover: CrossoverKind::Uniform,
//!         mutation: MutationKind::Swap,
//!     },
//! };
//!
//! let environment = Environment::new_with_seed(42);
//! let solution = solve_distribution_plan(&data, &request, &environment).unwrap();
//! assert_eq!(solution.active_terminals, vec!["Тверь".to_string()]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod costing;
pub mod evaluation;
pub mod grouping;
pub mod models;
pub mod prelude;
pub mod search;
pub mod solver;
pub mod utils;
