use super::*;
use crate::helpers::*;

fn single_band_rates() -> (Vec<InterCityRate>, Vec<IntraCityRate>) {
    (vec![create_inter_rate(100., 50., 30.)], vec![create_intra_rate(100., 50., 2000.)])
}

#[test]
fn can_short_circuit_on_empty_terminal_set() {
    let (inter, intra) = single_band_rates();
    let matrix = create_matrix(&[]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_fixed_terminals(&[], &[create_shipment("1", 1000., 2., "Клин")], pricing).unwrap();

    assert_eq!(evaluation.fitness, INFEASIBLE_COST);
    assert_eq!(evaluation.cost.total_cost, INFEASIBLE_COST);
    assert!(evaluation.routes.is_empty());
    assert!(evaluation.active_terminals.is_empty());
}

#[test]
fn can_price_single_terminal_plan() {
    let (inter, intra) = single_band_rates();
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 500)];
    let shipments = vec![create_shipment("SHP-1", 1000., 2., "Тверь")];
    let matrix = create_matrix(&[("Тверь", "Тверь", 0)]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_fixed_terminals(&terminals, &shipments, pricing).unwrap();

    // A single rate row makes the interpolated line-haul rate equal that row's rate; the only
    // destination coincides with the terminal so last mile degrades to the fixed fee. One tonne
    // in the smallest vehicle utilizes it above the floor, so no penalty is charged.
    assert_eq!(evaluation.cost.linehaul_cost, 30. * 500.);
    assert_eq!(evaluation.cost.last_mile_cost, 2000.);
    assert_eq!(evaluation.cost.penalty_cost, 0.);
    assert_eq!(evaluation.cost.total_cost, 30. * 500. + 2000.);
    assert_eq!(evaluation.fitness, evaluation.cost.total_cost);

    assert_eq!(evaluation.routes.len(), 1);
    assert_eq!(evaluation.routes[0].from_city, HUB_CITY);
    assert_eq!(evaluation.routes[0].to_terminal, "Тверь");
    assert_eq!(evaluation.routes[0].shipment_ids, vec!["SHP-1".to_string()]);
    assert_eq!(evaluation.routes[0].cost, 0.);
    assert_eq!(evaluation.routes[0].transport_used, TransportClass::T1_5);
}

#[test]
fn can_charge_underuse_penalty_for_light_group() {
    let (inter, intra) = single_band_rates();
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 500)];
    let shipments = vec![create_shipment("SHP-1", 600., 1.5, "Тверь")];
    let matrix = create_matrix(&[("Тверь", "Тверь", 0)]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_fixed_terminals(&terminals, &shipments, pricing).unwrap();

    // Utilization is max(0.6 / 1.5, 1.5 / 10.) = 0.4.
    assert!((evaluation.cost.penalty_cost - 10_000. * 0.2).abs() < 1e-9);
    assert_eq!(
        evaluation.cost.total_cost,
        evaluation.cost.linehaul_cost + evaluation.cost.last_mile_cost + evaluation.cost.penalty_cost
    );
}

#[test]
fn can_assign_shipments_to_nearest_terminal() {
    let (inter, intra) = single_band_rates();
    let terminals =
        vec![create_terminal("Тверь", "Северо-Запад", 200), create_terminal("Казань", "Волга", 800)];
    let shipments = vec![
        create_shipment("1", 2000., 4., "Клин"),
        create_shipment("2", 2000., 4., "Зеленодольск"),
        create_shipment("3", 2000., 4., "Клин"),
    ];
    let matrix = create_matrix(&[
        ("Тверь", "Клин", 80),
        ("Казань", "Клин", 700),
        ("Тверь", "Зеленодольск", 650),
        ("Казань", "Зеленодольск", 40),
    ]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_fixed_terminals(&terminals, &shipments, pricing).unwrap();

    assert_eq!(evaluation.routes.len(), 2);
    assert_eq!(evaluation.active_terminals, vec!["Тверь".to_string(), "Казань".to_string()]);

    let tver = evaluation.routes.iter().find(|route| route.to_terminal == "Тверь").unwrap();
    let kazan = evaluation.routes.iter().find(|route| route.to_terminal == "Казань").unwrap();

    assert_eq!(tver.shipment_ids, vec!["1".to_string(), "3".to_string()]);
    assert_eq!(kazan.shipment_ids, vec!["2".to_string()]);
}

#[test]
fn can_fail_on_unreachable_destination_with_fixed_terminals() {
    let (inter, intra) = single_band_rates();
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 200)];
    let shipments = vec![create_shipment("1", 1000., 2., "Владивосток")];
    let matrix = create_matrix(&[("Тверь", "Клин", 80)]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let result = evaluate_fixed_terminals(&terminals, &shipments, pricing);

    assert_eq!(result.unwrap_err().to_string(), "no terminal covers destination Владивосток");
}

#[test]
fn can_penalize_unreachable_destination_under_mask() {
    let (inter, intra) = single_band_rates();
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 200)];
    let shipments = vec![create_shipment("1", 1000., 2., "Владивосток")];
    let matrix = create_matrix(&[("Тверь", "Клин", 80)]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_activation_mask(&[true], &terminals, &shipments, pricing).unwrap();

    assert!(evaluation.cost.penalty_cost >= 1e9);
    assert!(evaluation.routes.is_empty());
    assert_eq!(
        evaluation.cost.total_cost,
        evaluation.cost.linehaul_cost + evaluation.cost.last_mile_cost + evaluation.cost.penalty_cost
    );
}

#[test]
fn can_select_terminal_subset_by_mask() {
    let (inter, intra) = single_band_rates();
    let terminals =
        vec![create_terminal("Тверь", "Северо-Запад", 200), create_terminal("Казань", "Волга", 800)];
    let shipments = vec![create_shipment("1", 2000., 4., "Клин")];
    let matrix = create_matrix(&[("Тверь", "Клин", 80), ("Казань", "Клин", 700)]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_activation_mask(&[false, true], &terminals, &shipments, pricing).unwrap();

    assert_eq!(evaluation.active_terminals, vec!["Казань".to_string()]);
    assert_eq!(evaluation.routes[0].to_terminal, "Казань");
}

#[test]
fn can_treat_empty_mask_as_infeasible() {
    let (inter, intra) = single_band_rates();
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 200)];
    let matrix = create_matrix(&[]);
    let pricing =
        PricingInputs { inter_city_rates: &inter, intra_city_rates: &intra, distances: &matrix };

    let evaluation = evaluate_activation_mask(&[false], &terminals, &[], pricing).unwrap();

    assert_eq!(evaluation.fitness, INFEASIBLE_COST);
}
