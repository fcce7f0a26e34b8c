#[cfg(test)]
#[path = "../../tests/unit/costing/transport_test.rs"]
mod transport_test;

use crate::models::Cost;

/// A penalty added when even the largest vehicle class cannot fit the load.
const OVERFLOW_PENALTY: Cost = 50_000.;

/// A vehicle is considered underused below this utilization level.
const UTILIZATION_FLOOR: f64 = 0.6;

/// A penalty per unit of missing utilization below the floor.
const UNDERUSE_PENALTY_RATE: Cost = 10_000.;

/// A closed set of available vehicle classes, ordered ascending by capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportClass {
    /// 1.5 t / 10 m³ van.
    T1_5,
    /// 3 t / 20 m³ truck.
    T3,
    /// 5 t / 36 m³ truck.
    T5,
    /// 10 t / 45 m³ truck.
    T10,
    /// 20 t / 86 m³ semi-trailer.
    T20,
}

/// Nominal capacities of one vehicle class.
#[derive(Clone, Copy, Debug)]
pub struct TransportSpec {
    /// A class tag.
    pub class: TransportClass,
    /// Nominal payload, tonnes.
    pub cap_tons: f64,
    /// Nominal body volume, cubic meters.
    pub cap_m3: f64,
}

/// The fixed vehicle catalog, ordered ascending by capacity.
pub const TRANSPORT_CATALOG: [TransportSpec; 5] = [
    TransportSpec { class: TransportClass::T1_5, cap_tons: 1.5, cap_m3: 10. },
    TransportSpec { class: TransportClass::T3, cap_tons: 3., cap_m3: 20. },
    TransportSpec { class: TransportClass::T5, cap_tons: 5., cap_m3: 36. },
    TransportSpec { class: TransportClass::T10, cap_tons: 10., cap_m3: 45. },
    TransportSpec { class: TransportClass::T20, cap_tons: 20., cap_m3: 86. },
];

/// A vehicle class chosen for one terminal group together with the shaping penalty it incurred.
#[derive(Clone, Copy, Debug)]
pub struct TransportChoice {
    /// The chosen class.
    pub class: TransportClass,
    /// Overflow and underutilization penalties, summed.
    pub penalty: Cost,
}

/// Picks the smallest vehicle class adequate for the given aggregate load. When none fits,
/// falls back to the largest class and charges the overflow penalty; a poorly utilized
/// vehicle is charged proportionally to the missing utilization.
pub fn select_transport(weight_tons: f64, volume_m3: f64) -> TransportChoice {
    let fitting = TRANSPORT_CATALOG.iter().find(|spec| weight_tons <= spec.cap_tons && volume_m3 <= spec.cap_m3);

    let (spec, mut penalty) = match fitting {
        Some(spec) => (spec, 0.),
        None => (&TRANSPORT_CATALOG[TRANSPORT_CATALOG.len() - 1], OVERFLOW_PENALTY),
    };

    let utilization = (weight_tons / spec.cap_tons).max(volume_m3 / spec.cap_m3);
    if utilization < UTILIZATION_FLOOR {
        penalty += UNDERUSE_PENALTY_RATE * (UTILIZATION_FLOOR - utilization);
    }

    TransportChoice { class: spec.class, penalty }
}
