//! Validation of the optimize request; violations are accumulated per field.

#[cfg(test)]
#[path = "../tests/unit/validation_test.rs"]
mod validation_test;

use crate::dto::{parse_crossover, parse_mutation, parse_selection, GaSettingsDto, OptimizeRequest};
use crate::errors::ErrorDetail;
use crossdock_core::prelude::{DeliveryDay, Direction, GaSettings};

const ALLOWED_DAYS: &str = "mon, tue, wed, thu, fri, sat, sun";
const ALLOWED_SELECTIONS: &str = "SELECTION_TOURNAMENT, SELECTION_ROULETTE, SELECTION_RANK";
const ALLOWED_CROSSOVERS: &str = "CROSSOVER_UNIFORM, CROSSOVER_SINGLE_POINT, CROSSOVER_TWO_POINT";
const ALLOWED_MUTATIONS: &str = "MUTATION_INVERSION, MUTATION_SWAP";

/// A fully validated optimize request expressed in engine types.
#[derive(Debug)]
pub struct ValidatedOptimizeRequest {
    pub direction: Option<Direction>,
    pub delivery_days: Vec<DeliveryDay>,
    pub ga_settings: GaSettings,
}

pub fn validate_optimize_request(request: &OptimizeRequest) -> Result<ValidatedOptimizeRequest, Vec<ErrorDetail>> {
    let mut details = Vec::new();

    let direction_raw = request.direction.trim();
    let direction = if direction_raw.is_empty() {
        None
    } else {
        let parsed = Direction::from_name(direction_raw);
        if parsed.is_none() {
            details.push(ErrorDetail::new(
                "direction",
                format!("value '{direction_raw}' is not allowed. Allowed: {}", allowed_directions()),
            ));
        }
        parsed
    };

    let mut delivery_days = Vec::new();
    if request.delivery_days.is_empty() {
        details.push(ErrorDetail::new("delivery_days", "field is required"));
    } else if request.delivery_days.len() != 2 {
        details.push(ErrorDetail::new(
            "delivery_days",
            format!(
                "exactly 2 delivery days must be provided, got {}. Allowed values: {ALLOWED_DAYS}",
                request.delivery_days.len()
            ),
        ));
    } else {
        for (index, raw) in request.delivery_days.iter().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                details.push(ErrorDetail::new(format!("delivery_days[{index}]"), "day cannot be empty"));
                continue;
            }

            match DeliveryDay::from_key(&trimmed.to_lowercase()) {
                Ok(day) => {
                    if delivery_days.contains(&day) {
                        details.push(ErrorDetail::new(
                            format!("delivery_days[{index}]"),
                            format!("duplicate delivery day: '{raw}'"),
                        ));
                    }
                    delivery_days.push(day);
                }
                Err(_) => details.push(ErrorDetail::new(
                    format!("delivery_days[{index}]"),
                    format!("invalid day '{raw}'. Allowed: {ALLOWED_DAYS}"),
                )),
            }
        }
    }

    let ga_settings = match &request.ga_settings_level_1 {
        Some(settings) => validate_ga_settings(settings, "ga_settings_level_1", &mut details),
        None => {
            details.push(ErrorDetail::new("ga_settings_level_1", "field is required"));
            None
        }
    };

    match ga_settings {
        Some(ga_settings) if details.is_empty() => Ok(ValidatedOptimizeRequest { direction, delivery_days, ga_settings }),
        _ => Err(details),
    }
}

fn validate_ga_settings(settings: &GaSettingsDto, prefix: &str, details: &mut Vec<ErrorDetail>) -> Option<GaSettings> {
    if settings.num_generations == 0 {
        details.push(ErrorDetail::new(format!("{prefix}.num_generations"), "must be greater than 0"));
    }
    if settings.num_individuals == 0 {
        details.push(ErrorDetail::new(format!("{prefix}.num_individuals"), "must be greater than 0"));
    }
    if settings.stopping_criterion == 0 {
        details.push(ErrorDetail::new(format!("{prefix}.stopping_criterion"), "must be greater than 0"));
    }

    let selection = validate_enum(
        &settings.selection_type,
        parse_selection,
        &format!("{prefix}.selection_type"),
        ALLOWED_SELECTIONS,
        details,
    );
    let crossover = validate_enum(
        &settings.crossover_type,
        parse_crossover,
        &format!("{prefix}.crossover_type"),
        ALLOWED_CROSSOVERS,
        details,
    );
    let mutation = validate_enum(
        &settings.mutation_type,
        parse_mutation,
        &format!("{prefix}.mutation_type"),
        ALLOWED_MUTATIONS,
        details,
    );

    match (selection, crossover, mutation) {
        (Some(selection), Some(crossover), Some(mutation)) => Some(GaSettings {
            num_generations: settings.num_generations,
            num_individuals: settings.num_individuals,
            stopping_criterion: settings.stopping_criterion,
            selection,
            crossover,
            mutation,
        }),
        _ => None,
    }
}

fn validate_enum<T>(
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
    field: &str,
    allowed: &str,
    details: &mut Vec<ErrorDetail>,
) -> Option<T> {
    if value.is_empty() {
        details.push(ErrorDetail::new(field, format!("field is required. Allowed values: {allowed}")));
        return None;
    }

    let parsed = parse(value);
    if parsed.is_none() {
        details.push(ErrorDetail::new(field, format!("invalid value. Allowed: {allowed}")));
    }
    parsed
}

fn allowed_directions() -> String {
    Direction::ALL.iter().map(|direction| direction.as_str()).collect::<Vec<_>>().join(", ")
}
