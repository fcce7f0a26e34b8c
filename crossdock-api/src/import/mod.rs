//! The XLSX ingestion pipeline: classify uploaded workbooks, truncate the store and rebuild
//! it from the parsed sheets.

pub mod parser;

use crate::errors::ApiError;
use crate::storage::PgStorage;
use calamine::{Data, Reader, Xlsx};
use crossdock_core::prelude::{InterCityRate, IntraCityRate};
use self::parser::SheetRows;
use std::io::Cursor;

const SHIPMENTS_SHEET: &str = "Data";
const TERMINALS_SHEET: &str = "Zones";
const INTER_TARIFF_SHEET: &str = "Тариф на межгород";
const INTRA_TARIFF_SHEET: &str = "Тариф на внутригород";
const DISTANCE_SHEETS: [&str; 4] = ["Северо-Запад", "Восток", "Волга", "Юг"];

/// One uploaded file held in memory.
pub struct FileData {
    pub name: String,
    pub content: Vec<u8>,
}

/// Imports the uploaded workbooks: the store is truncated first, so a failed import leaves
/// empty tables which the next successful import rebuilds from scratch.
pub async fn import_workbooks(storage: &PgStorage, files: &[FileData]) -> Result<(), ApiError> {
    tracing::info!(file_count = files.len(), "starting data import from XLSX files");

    truncate_all(storage).await?;

    let mut stat_file = None;
    let mut distances_file = None;

    for file in files {
        let Some(mut workbook) = open_workbook(&file.content) else {
            tracing::warn!(filename = %file.name, "could not open file as XLSX, skipping");
            continue;
        };

        let sheet_names = workbook.sheet_names();
        if sheet_names.iter().any(|name| name == SHIPMENTS_SHEET || name == TERMINALS_SHEET) {
            stat_file = Some(file);
        } else if sheet_names.iter().any(|name| DISTANCE_SHEETS.contains(&name.as_str())) {
            distances_file = Some(file);
        }
    }

    if let Some(file) = stat_file {
        tracing::info!(filename = %file.name, "processing stat file");
        process_stat_file(storage, file).await?;
    }

    if let Some(file) = distances_file {
        tracing::info!(filename = %file.name, "processing distances file");
        process_distances_file(storage, file).await?;
    }

    tracing::info!("data import completed");
    Ok(())
}

async fn truncate_all(storage: &PgStorage) -> Result<(), ApiError> {
    let truncate = |result: sqlx::Result<()>, table: &str| {
        result.map_err(|err| ApiError::internal(format!("failed to truncate {table}: {err}")))
    };

    truncate(storage.truncate_shipments().await, "shipments")?;
    truncate(storage.truncate_terminals().await, "terminals")?;
    truncate(storage.truncate_distances().await, "distances")?;
    truncate(storage.truncate_inter_city_rates().await, "inter_city_rates")?;
    truncate(storage.truncate_intra_city_rates().await, "intra_city_rates")?;

    Ok(())
}

async fn process_stat_file(storage: &PgStorage, file: &FileData) -> Result<(), ApiError> {
    let mut workbook = open_workbook(&file.content)
        .ok_or_else(|| ApiError::internal(format!("failed to reopen file {}", file.name)))?;

    load_shipments_and_terminals(storage, &mut workbook).await?;
    load_inter_city_rates(storage, &mut workbook).await?;
    load_intra_city_rates(storage, &mut workbook).await?;

    Ok(())
}

async fn process_distances_file(storage: &PgStorage, file: &FileData) -> Result<(), ApiError> {
    let mut workbook = open_workbook(&file.content)
        .ok_or_else(|| ApiError::internal(format!("failed to reopen file {}", file.name)))?;

    let mut all_distances = Vec::new();
    for sheet in DISTANCE_SHEETS {
        let Some(rows) = sheet_rows(&mut workbook, sheet) else {
            tracing::warn!(sheet, "sheet not found in file, skipping");
            continue;
        };

        all_distances.extend(parser::parse_distance_sheet(&rows));
    }

    if all_distances.is_empty() {
        tracing::warn!("no distances were parsed from the file");
        return Ok(());
    }

    storage.batch_insert_distances(&all_distances).await.map_err(|err| {
        match constraint_violation(&err) {
            Some("distances_km_check") => ApiError::unprocessable_entity(
                "Ошибка при загрузке 'filled_distances_MKR.xlsx': обнаружены строки с отрицательным расстоянием.",
            ),
            _ => ApiError::internal(format!("failed to import distances: {err}")),
        }
    })?;
    tracing::info!(count = all_distances.len(), "inserted distances");

    Ok(())
}

async fn load_shipments_and_terminals(
    storage: &PgStorage,
    workbook: &mut Xlsx<Cursor<&[u8]>>,
) -> Result<(), ApiError> {
    let Some(rows) = sheet_rows(workbook, SHIPMENTS_SHEET) else {
        tracing::warn!("sheet 'Data' not found, skipping shipments");
        return Ok(());
    };

    let shipments = parser::parse_shipments(&rows);
    if shipments.is_empty() {
        tracing::warn!("no valid shipments found in 'Data' sheet");
    } else {
        storage.batch_insert_shipments(&shipments).await.map_err(|err| {
            match constraint_violation(&err) {
                Some("shipments_volume_m3_check") => ApiError::unprocessable_entity(
                    "Ошибка при загрузке файла 'stat.xlsx': в листе 'Data' обнаружены строки с невалидным значением 'М3' (должно быть > 0).",
                ),
                Some("shipments_weight_kg_check") => ApiError::unprocessable_entity(
                    "Ошибка при загрузке файла 'stat.xlsx': в листе 'Data' обнаружены строки с невалидным значением 'Расчетный вес, кг' (должно быть > 0).",
                ),
                _ => ApiError::internal(format!("failed to import shipments: {err}")),
            }
        })?;
        tracing::info!(count = shipments.len(), "inserted shipments");
    }

    let Some(rows) = sheet_rows(workbook, TERMINALS_SHEET) else {
        tracing::warn!("sheet 'Zones' not found, skipping terminals");
        return Ok(());
    };

    let terminals = parser::parse_terminals(&rows);
    if terminals.is_empty() {
        tracing::warn!("no valid terminals found in 'Zones' sheet");
    } else {
        storage
            .batch_insert_terminals(&terminals)
            .await
            .map_err(|err| ApiError::internal(format!("failed to import terminals: {err}")))?;
        tracing::info!(count = terminals.len(), "inserted terminals");
    }

    Ok(())
}

async fn load_inter_city_rates(storage: &PgStorage, workbook: &mut Xlsx<Cursor<&[u8]>>) -> Result<(), ApiError> {
    let Some(rows) = sheet_rows(workbook, INTER_TARIFF_SHEET) else {
        tracing::warn!(sheet = INTER_TARIFF_SHEET, "tariff sheet not found, skipping");
        return Ok(());
    };

    let bands = parser::parse_tariff_sheet(&rows).map_err(|_| {
        ApiError::unprocessable_entity(
            "Ошибка при загрузке 'Тариф на межгород': количество значений в строках 'Объем', 'Масса' и 'Тариф' не совпадает.",
        )
    })?;

    if bands.is_empty() {
        tracing::warn!(sheet = INTER_TARIFF_SHEET, "tariff sheet holds no usable rows, skipping");
        return Ok(());
    }

    let rates = bands
        .into_iter()
        .map(|(volume_m3, weight_tons, rate_per_km)| InterCityRate { volume_m3, weight_tons, rate_per_km })
        .collect::<Vec<_>>();

    storage.batch_insert_inter_city_rates(&rates).await.map_err(|err| {
        match constraint_violation(&err) {
            Some("inter_city_rates_rate_per_km_check") => ApiError::unprocessable_entity(
                "Ошибка при загрузке 'Тариф на межгород': обнаружены строки с невалидным значением 'руб/км'.",
            ),
            _ => ApiError::internal(format!("failed to import rates: {err}")),
        }
    })?;
    tracing::info!(count = rates.len(), "inserted inter-city rates");

    Ok(())
}

async fn load_intra_city_rates(storage: &PgStorage, workbook: &mut Xlsx<Cursor<&[u8]>>) -> Result<(), ApiError> {
    let Some(rows) = sheet_rows(workbook, INTRA_TARIFF_SHEET) else {
        tracing::warn!(sheet = INTRA_TARIFF_SHEET, "tariff sheet not found, skipping");
        return Ok(());
    };

    let bands = parser::parse_tariff_sheet(&rows).map_err(|_| {
        ApiError::unprocessable_entity(
            "Ошибка при загрузке 'Тариф на внутригород': количество значений в строках 'Объем', 'Масса' и 'Тариф' не совпадает.",
        )
    })?;

    if bands.is_empty() {
        tracing::warn!(sheet = INTRA_TARIFF_SHEET, "tariff sheet holds no usable rows, skipping");
        return Ok(());
    }

    let rates = bands
        .into_iter()
        .map(|(volume_m3, weight_tons, rate_fixed)| IntraCityRate { volume_m3, weight_tons, rate_fixed })
        .collect::<Vec<_>>();

    storage.batch_insert_intra_city_rates(&rates).await.map_err(|err| {
        match constraint_violation(&err) {
            Some("intra_city_rates_rate_fixed_check") => ApiError::unprocessable_entity(
                "Ошибка при загрузке 'Тариф на внутригород': обнаружены строки с невалидным значением 'руб'.",
            ),
            _ => ApiError::internal(format!("failed to import rates: {err}")),
        }
    })?;
    tracing::info!(count = rates.len(), "inserted intra-city rates");

    Ok(())
}

fn open_workbook(content: &[u8]) -> Option<Xlsx<Cursor<&[u8]>>> {
    Xlsx::new(Cursor::new(content)).ok()
}

fn sheet_rows(workbook: &mut Xlsx<Cursor<&[u8]>>, sheet: &str) -> Option<SheetRows> {
    let range = workbook.worksheet_range(sheet).ok()?;
    Some(range.rows().map(|row| row.iter().map(cell_to_string).collect()).collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) if value.fract() == 0. && value.abs() < 1e15 => format!("{}", *value as i64),
        Data::Int(value) => value.to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|datetime| datetime.date().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

fn constraint_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23514") => db_err.constraint(),
        _ => None,
    }
}
