//! Parsing of the workbook sheets into domain rows.
//!
//! Parsers are forgiving the way operators expect spreadsheet tooling to be: rows with
//! unparsable or out-of-range values are skipped with a warning instead of failing the whole
//! import. Structural defects which would silently corrupt a tariff table are reported.

#[cfg(test)]
#[path = "../../tests/unit/import/parser_test.rs"]
mod parser_test;

use chrono::NaiveDate;
use crossdock_core::prelude::{Distance, Shipment, Terminal};

/// A worksheet flattened into trimmed string cells.
pub type SheetRows = Vec<Vec<String>>;

const DATE_FORMATS: [&str; 7] =
    ["%Y-%m-%d", "%d-%b-%y", "%m/%d/%y", "%m-%d-%y", "%d.%m.%Y", "%d.%m.%y", "%d. %B %Y"];

const RUSSIAN_MONTHS: [(&str, u32); 12] = [
    ("янв", 1),
    ("фев", 2),
    ("мар", 3),
    ("апр", 4),
    ("май", 5),
    ("июн", 6),
    ("июл", 7),
    ("авг", 8),
    ("сен", 9),
    ("окт", 10),
    ("ноя", 11),
    ("дек", 12),
];

/// Reads shipments out of the `Data` sheet: 0=id, 1=weight_kg, 2=volume_m3,
/// 3=destination_city, 7=date.
pub fn parse_shipments(rows: &[Vec<String>]) -> Vec<Shipment> {
    let mut shipments = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() < 8 {
            continue;
        }

        let weight = row[1].trim().parse::<f64>();
        let volume = row[2].trim().parse::<f64>();
        let (weight_kg, volume_m3) = match (weight, volume) {
            (Ok(weight), Ok(volume)) => (weight, volume),
            _ => {
                tracing::warn!(row_index = index, "skipping shipment with invalid weight or volume");
                continue;
            }
        };

        if weight_kg <= 0. {
            tracing::warn!(row_index = index, weight_kg, "skipping shipment with non-positive weight_kg");
            continue;
        }
        if volume_m3 <= 0. {
            tracing::warn!(row_index = index, volume_m3, "skipping shipment with non-positive volume_m3");
            continue;
        }

        let date_raw = row[7].trim();
        let Some(date) = parse_flexible_date(date_raw) else {
            tracing::warn!(row_index = index, date = date_raw, "could not parse date, skipping row");
            continue;
        };

        shipments.push(Shipment {
            id: row[0].trim().to_string(),
            weight_kg,
            volume_m3,
            destination_city: row[3].trim().to_string(),
            date,
        });
    }

    shipments
}

/// Reads terminals out of the `Zones` sheet: 1=city, 2=direction, 3=distance_from_moscow_km.
pub fn parse_terminals(rows: &[Vec<String>]) -> Vec<Terminal> {
    let mut terminals = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() < 5 {
            continue;
        }

        let city = row[1].trim();
        if city.is_empty() {
            tracing::warn!(row_index = index, "skipping terminal with empty city");
            continue;
        }

        let direction = row[2].trim();
        if direction.is_empty() {
            tracing::warn!(row_index = index, city, "skipping terminal with empty direction");
            continue;
        }

        let distance_raw = row[3].trim();
        let Ok(distance_from_moscow_km) = distance_raw.parse::<i32>() else {
            tracing::warn!(row_index = index, city, value = distance_raw, "skipping terminal with invalid distance");
            continue;
        };
        if distance_from_moscow_km < 0 {
            tracing::warn!(row_index = index, city, distance_from_moscow_km, "skipping terminal with negative distance");
            continue;
        }

        terminals.push(Terminal {
            city: city.to_string(),
            direction: direction.to_string(),
            distance_from_moscow_km,
        });
    }

    terminals
}

/// Reads a piecewise tariff sheet laid out in rows: row 1 holds volumes, row 2 weights and
/// row 3 the rates; column 0 carries labels. Decimal commas are accepted. Returns
/// `(volume_m3, weight_tons, rate)` triples.
pub fn parse_tariff_sheet(rows: &[Vec<String>]) -> Result<Vec<(f64, f64, f64)>, &'static str> {
    if rows.len() < 4 {
        return Ok(vec![]);
    }

    let volumes = parse_number_row(&rows[1]);
    let weights = parse_number_row(&rows[2]);
    let rates = parse_number_row(&rows[3]);

    if volumes.len() != weights.len() || weights.len() != rates.len() {
        return Err("mismatched lengths in tariff rows");
    }

    Ok(volumes
        .into_iter()
        .zip(weights)
        .zip(rates)
        .map(|((volume_m3, weight_tons), rate)| (volume_m3, weight_tons, rate))
        .collect())
}

/// Reads one direction sheet of the distances workbook: the header row carries city names and
/// cell `(i, j)` is the distance from `headers[i]` to `headers[j]`.
pub fn parse_distance_sheet(rows: &[Vec<String>]) -> Vec<Distance> {
    let mut distances = Vec::new();

    let Some(headers) = rows.first() else {
        return distances;
    };

    for (i, row) in rows.iter().enumerate().skip(1) {
        let from_city = headers.get(i).map(|header| header.trim()).unwrap_or_default();
        if from_city.is_empty() {
            tracing::warn!(row_index = i, "skipping row: from city header is empty");
            continue;
        }

        for (j, cell) in row.iter().enumerate().skip(1) {
            let to_city = headers.get(j).map(|header| header.trim()).unwrap_or_default();
            if to_city.is_empty() {
                tracing::warn!(from_city, row_index = i, col_index = j, "skipping cell: to city header is empty");
                continue;
            }

            let Ok(km) = cell.trim().parse::<i32>() else {
                tracing::warn!(from_city, to_city, value = cell.trim(), "skipping cell: not an integer distance");
                continue;
            };

            distances.push(Distance { from_city: from_city.to_string(), to_city: to_city.to_string(), km });
        }
    }

    distances
}

/// Parses a date in any of the formats the source spreadsheets are known to use, including
/// Russian month names such as `05.авг.2024`.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    parse_russian_month_date(trimmed)
}

fn parse_russian_month_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month_name = parts[1].trim().to_lowercase();
    let month = RUSSIAN_MONTHS.iter().find(|(name, _)| *name == month_name).map(|&(_, month)| month)?;

    let year_raw = parts[2].trim();
    let year: i32 = match year_raw.len() {
        2 => 2000 + year_raw.parse::<i32>().ok()?,
        4 => year_raw.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_number_row(row: &[String]) -> Vec<f64> {
    row.iter().skip(1).filter_map(|cell| cell.trim().replace(',', ".").parse::<f64>().ok()).collect()
}
