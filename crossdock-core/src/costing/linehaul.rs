#[cfg(test)]
#[path = "../../tests/unit/costing/linehaul_test.rs"]
mod linehaul_test;

use crate::models::{Cost, InterCityRate, Terminal};
use crate::utils::GenericResult;

/// Prices the hub-to-terminal leg for one terminal.
///
/// The effective per-km rate is a linear interpolation between the extreme tariff rates over
/// the distance range spanned by the active terminal set: farther terminals get cheaper per-km
/// rates, reflecting bulk long-haul discounts. With a degenerate distance range the average of
/// the extreme rates is used.
pub fn linehaul_cost(
    terminal: &Terminal,
    active_terminals: &[Terminal],
    inter_city_rates: &[InterCityRate],
) -> GenericResult<Cost> {
    if inter_city_rates.is_empty() {
        return Err("inter-city rates list is empty".into());
    }
    if active_terminals.is_empty() {
        return Err("terminals list is empty".into());
    }

    let (min_rate, max_rate) = min_max(inter_city_rates.iter().map(|rate| rate.rate_per_km));
    let (min_km, max_km) = min_max(active_terminals.iter().map(|t| f64::from(t.distance_from_moscow_km)));

    let distance = f64::from(terminal.distance_from_moscow_km);

    if (max_km - min_km).abs() < f64::EPSILON {
        let rate = (min_rate + max_rate) / 2.;
        return Ok(rate * distance);
    }

    let rate = max_rate - (max_rate - min_rate) * ((distance - min_km) / (max_km - min_km));

    Ok(rate * distance)
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::MAX, f64::MIN), |(min, max), value| (min.min(value), max.max(value)))
}
