#[cfg(test)]
#[path = "../../tests/unit/costing/tariff_test.rs"]
mod tariff_test;

use crate::models::{InterCityRate, IntraCityRate};
use crate::utils::GenericResult;

/// Exposes the (weight, volume) upper bounds a piecewise tariff row covers.
pub trait TariffBand {
    /// An upper weight bound, tonnes.
    fn weight_tons(&self) -> f64;
    /// An upper volume bound, cubic meters.
    fn volume_m3(&self) -> f64;
}

impl TariffBand for InterCityRate {
    fn weight_tons(&self) -> f64 {
        self.weight_tons
    }

    fn volume_m3(&self) -> f64 {
        self.volume_m3
    }
}

impl TariffBand for IntraCityRate {
    fn weight_tons(&self) -> f64 {
        self.weight_tons
    }

    fn volume_m3(&self) -> f64 {
        self.volume_m3
    }
}

/// Finds the inter-city tariff row applicable to the given aggregate weight and volume.
pub fn find_inter_city_rate(weight_tons: f64, volume_m3: f64, rates: &[InterCityRate]) -> GenericResult<InterCityRate> {
    smallest_fitting_band(weight_tons, volume_m3, rates, "inter-city")
}

/// Finds the intra-city tariff row applicable to the given aggregate weight and volume.
pub fn find_intra_city_rate(weight_tons: f64, volume_m3: f64, rates: &[IntraCityRate]) -> GenericResult<IntraCityRate> {
    smallest_fitting_band(weight_tons, volume_m3, rates, "intra-city")
}

/// Returns the smallest row by (weight, volume) which covers both given values. When no row
/// covers them, degrades to the largest tariff of the table.
fn smallest_fitting_band<T>(weight_tons: f64, volume_m3: f64, rates: &[T], label: &str) -> GenericResult<T>
where
    T: TariffBand + Copy,
{
    if rates.is_empty() {
        return Err(format!("{label} rates list is empty").into());
    }

    let mut sorted = rates.to_vec();
    sorted.sort_by(|a, b| {
        a.weight_tons().total_cmp(&b.weight_tons()).then_with(|| a.volume_m3().total_cmp(&b.volume_m3()))
    });

    match sorted.iter().find(|row| weight_tons <= row.weight_tons() && volume_m3 <= row.volume_m3()) {
        Some(row) => Ok(*row),
        None => Ok(sorted[sorted.len() - 1]),
    }
}
