//! Partitioning of shipments into two delivery-day cohorts.
//!
//! The week is treated as a cycle with Saturday as the wrap origin: each delivery day is the
//! ship-by day for everything that arrived since the previous cut.

#[cfg(test)]
#[path = "../../tests/unit/grouping/group_by_day_test.rs"]
mod group_by_day_test;

use crate::models::Shipment;
use crate::utils::GenericResult;
use chrono::Datelike;

/// The cyclic week origin used by the delivery-day intervals.
const SATURDAY: u8 = 6;

/// One of the weekly delivery days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DeliveryDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DeliveryDay {
    /// All known delivery days keyed the way requests spell them.
    pub const ALL: [DeliveryDay; 7] = [
        DeliveryDay::Mon,
        DeliveryDay::Tue,
        DeliveryDay::Wed,
        DeliveryDay::Thu,
        DeliveryDay::Fri,
        DeliveryDay::Sat,
        DeliveryDay::Sun,
    ];

    /// Returns the request key of the day.
    pub fn key(&self) -> &'static str {
        match self {
            DeliveryDay::Mon => "mon",
            DeliveryDay::Tue => "tue",
            DeliveryDay::Wed => "wed",
            DeliveryDay::Thu => "thu",
            DeliveryDay::Fri => "fri",
            DeliveryDay::Sat => "sat",
            DeliveryDay::Sun => "sun",
        }
    }

    /// Parses a day from its request key.
    pub fn from_key(key: &str) -> GenericResult<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.key() == key)
            .ok_or_else(|| format!("invalid delivery day(s): {key}. Allowed: mon, tue, wed, thu, fri, sat, sun").into())
    }

    /// Returns the weekday number counted from Sunday, matching calendar weekday ordering.
    fn index(&self) -> u8 {
        match self {
            DeliveryDay::Sun => 0,
            DeliveryDay::Mon => 1,
            DeliveryDay::Tue => 2,
            DeliveryDay::Wed => 3,
            DeliveryDay::Thu => 4,
            DeliveryDay::Fri => 5,
            DeliveryDay::Sat => 6,
        }
    }
}

/// Partitions shipments into the cohorts of the two given delivery days. Shipments whose
/// weekday falls outside both cyclic intervals are dropped.
pub fn group_shipments_by_delivery_day(
    shipments: &[Shipment],
    delivery_days: &[DeliveryDay],
) -> GenericResult<Vec<(DeliveryDay, Vec<Shipment>)>> {
    if delivery_days.len() != 2 {
        return Err(format!("exactly 2 delivery days are required, got {}", delivery_days.len()).into());
    }

    let (day1, day2) = (delivery_days[0], delivery_days[1]);
    let (d1, d2) = (day1.index(), day2.index());

    let (interval1, interval2) =
        if d1 < d2 { ((SATURDAY, d1), (d1 + 1, d2)) } else { ((d2 + 1, d1), (SATURDAY, d2)) };

    let mut bucket1 = Vec::new();
    let mut bucket2 = Vec::new();

    for shipment in shipments {
        let weekday = shipment.date.weekday().num_days_from_sunday() as u8;

        if is_between(weekday, interval1.0, interval1.1) {
            bucket1.push(shipment.clone());
        } else if is_between(weekday, interval2.0, interval2.1) {
            bucket2.push(shipment.clone());
        }
    }

    Ok(vec![(day1, bucket1), (day2, bucket2)])
}

/// Tests cyclic weekday interval membership: a wrapped interval covers both its tails.
fn is_between(day: u8, start: u8, end: u8) -> bool {
    if start <= end {
        day >= start && day <= end
    } else {
        day >= start || day <= end
    }
}
