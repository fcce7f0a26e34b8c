#[cfg(test)]
#[path = "../../tests/unit/costing/last_mile_test.rs"]
mod last_mile_test;

use crate::costing::{find_inter_city_rate, find_intra_city_rate};
use crate::models::{Cost, DistanceRow, InterCityRate, IntraCityRate, Shipment};
use crate::utils::GenericResult;

/// Total weight above which a consolidated short-haul delivery becomes possible, tonnes.
const SHORT_HAUL_MIN_WEIGHT_TONS: f64 = 2.5;

/// Destinations farther than this distance disqualify the short-haul flat fee, km.
const SHORT_HAUL_MAX_KM: i32 = 100;

/// The flat fee charged for a short-haul consolidated delivery, currency units.
const SHORT_HAUL_FLAT_FEE: Cost = 7000.;

/// Prices the distribution of the given shipments from one terminal to their destinations.
///
/// A single tariff row is selected for the aggregate weight and volume of the whole set,
/// modelling a consolidated pickup; the intra-city flat fee is charged once per terminal
/// regardless of fan-out. A heavy set whose destinations all lie close to the terminal is
/// priced with a flat fee instead.
pub fn last_mile_cost(
    shipments: &[Shipment],
    terminal_city: &str,
    inter_city_rates: &[InterCityRate],
    intra_city_rates: &[IntraCityRate],
    distances: Option<&DistanceRow>,
) -> GenericResult<Cost> {
    if shipments.is_empty() {
        return Ok(0.);
    }

    let total_weight_tons: f64 = shipments.iter().map(Shipment::weight_tons).sum();
    let total_volume_m3: f64 = shipments.iter().map(|shipment| shipment.volume_m3).sum();

    if total_weight_tons > SHORT_HAUL_MIN_WEIGHT_TONS {
        let mut all_within_reach = true;
        for shipment in shipments {
            let km = destination_km(distances, terminal_city, &shipment.destination_city)?;
            if km > SHORT_HAUL_MAX_KM {
                all_within_reach = false;
                break;
            }
        }
        if all_within_reach {
            return Ok(SHORT_HAUL_FLAT_FEE);
        }
    }

    let inter_city_rate =
        find_inter_city_rate(total_weight_tons, total_volume_m3, inter_city_rates).map_err(|err| {
            format!(
                "failed to find inter-city rate for total weight {total_weight_tons:.2} t and volume {total_volume_m3:.2} m3: {err}"
            )
        })?;

    let intra_city_rate =
        find_intra_city_rate(total_weight_tons, total_volume_m3, intra_city_rates).map_err(|err| {
            format!(
                "failed to find intra-city rate for total weight {total_weight_tons:.2} t and volume {total_volume_m3:.2} m3: {err}"
            )
        })?;

    let mut total_cost = 0.;
    for shipment in shipments {
        let km = destination_km(distances, terminal_city, &shipment.destination_city)?;
        total_cost += inter_city_rate.rate_per_km * f64::from(km);
    }

    total_cost += intra_city_rate.rate_fixed;

    Ok(total_cost)
}

fn destination_km(distances: Option<&DistanceRow>, terminal_city: &str, destination_city: &str) -> GenericResult<i32> {
    distances
        .and_then(|row| row.get(destination_city))
        .copied()
        .ok_or_else(|| format!("distance not found for route {terminal_city} -> {destination_city}").into())
}
