//! Domain entities of the distribution planning problem.

use chrono::NaiveDate;
use hashbrown::HashMap;

/// Specifies cost value in currency units.
pub type Cost = f64;

/// The central hub all line-haul legs start from.
pub const HUB_CITY: &str = "Москва";

/// A single cargo shipment to be dispatched through one of the cross-dock terminals.
#[derive(Clone, Debug)]
pub struct Shipment {
    /// An unique shipment id.
    pub id: String,
    /// Cargo weight, kilograms. Always positive.
    pub weight_kg: f64,
    /// Cargo volume, cubic meters. Always positive.
    pub volume_m3: f64,
    /// A destination city name.
    pub destination_city: String,
    /// A calendar date the shipment arrived on.
    pub date: NaiveDate,
}

impl Shipment {
    /// Returns cargo weight converted to tonnes.
    pub fn weight_tons(&self) -> f64 {
        self.weight_kg / 1000.
    }
}

/// A candidate cross-dock terminal.
#[derive(Clone, Debug)]
pub struct Terminal {
    /// A city name, unique across the catalog.
    pub city: String,
    /// A geographic corridor the terminal belongs to.
    pub direction: String,
    /// Distance from the central hub, km.
    pub distance_from_moscow_km: i32,
}

/// A single edge of the sparse city-to-city distance matrix.
#[derive(Clone, Debug)]
pub struct Distance {
    /// An origin city.
    pub from_city: String,
    /// A destination city.
    pub to_city: String,
    /// Road distance, km.
    pub km: i32,
}

/// Distances from one origin city to its known destinations.
pub type DistanceRow = HashMap<String, i32>;

/// A sparse distance matrix pivoted by origin city.
#[derive(Clone, Debug, Default)]
pub struct DistanceMatrix {
    rows: HashMap<String, DistanceRow>,
}

impl DistanceMatrix {
    /// Builds the matrix from a flat edge list.
    pub fn from_edges(edges: &[Distance]) -> Self {
        let mut rows: HashMap<String, DistanceRow> = HashMap::new();
        for edge in edges {
            rows.entry(edge.from_city.clone()).or_default().insert(edge.to_city.clone(), edge.km);
        }

        Self { rows }
    }

    /// Returns all known distances from the given origin city.
    pub fn row(&self, from_city: &str) -> Option<&DistanceRow> {
        self.rows.get(from_city)
    }

    /// Returns the distance between two cities if it is known.
    pub fn km(&self, from_city: &str, to_city: &str) -> Option<i32> {
        self.rows.get(from_city).and_then(|row| row.get(to_city)).copied()
    }
}

/// A row of the piecewise inter-city tariff: a per-km rate applicable up to the given
/// weight and volume bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterCityRate {
    /// An upper volume bound the rate covers, cubic meters.
    pub volume_m3: f64,
    /// An upper weight bound the rate covers, tonnes.
    pub weight_tons: f64,
    /// The rate itself, currency units per km.
    pub rate_per_km: f64,
}

/// A row of the piecewise intra-city tariff: a flat fee applicable up to the given
/// weight and volume bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntraCityRate {
    /// An upper volume bound the fee covers, cubic meters.
    pub volume_m3: f64,
    /// An upper weight bound the fee covers, tonnes.
    pub weight_tons: f64,
    /// The flat fee, currency units.
    pub rate_fixed: f64,
}

/// One of the four geographic corridors grouping terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The eastern corridor.
    East,
    /// The north-western corridor.
    NorthWest,
    /// The southern corridor.
    South,
    /// The Volga corridor.
    Volga,
}

impl Direction {
    /// All known corridors in their canonical order.
    pub const ALL: [Direction; 4] = [Direction::East, Direction::NorthWest, Direction::South, Direction::Volga];

    /// Returns the corridor name as it appears in the terminal catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "Восток",
            Direction::NorthWest => "Северо-Запад",
            Direction::South => "Юг",
            Direction::Volga => "Волга",
        }
    }

    /// Parses a corridor from its catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.as_str() == name)
    }
}
