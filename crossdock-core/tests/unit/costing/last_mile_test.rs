use super::*;
use crate::helpers::*;

fn wide_rates() -> (Vec<InterCityRate>, Vec<IntraCityRate>) {
    (vec![create_inter_rate(100., 50., 20.)], vec![create_intra_rate(100., 50., 1500.)])
}

#[test]
fn can_price_empty_set_as_zero() {
    let (inter, intra) = wide_rates();

    let cost = last_mile_cost(&[], "Тверь", &inter, &intra, None).unwrap();

    assert_eq!(cost, 0.);
}

#[test]
fn can_apply_short_haul_flat_fee() {
    let (inter, intra) = wide_rates();
    let shipments = vec![
        create_shipment("1", 1000., 2., "Клин"),
        create_shipment("2", 1000., 2., "Дубна"),
        create_shipment("3", 1000., 2., "Клин"),
    ];
    let matrix = create_matrix(&[("Тверь", "Клин", 80), ("Тверь", "Дубна", 100)]);

    let cost = last_mile_cost(&shipments, "Тверь", &inter, &intra, matrix.row("Тверь")).unwrap();

    assert_eq!(cost, 7000.);
}

#[test]
fn can_skip_flat_fee_at_weight_boundary() {
    // Exactly 2.5 t in total does not qualify: the rule requires strictly more.
    let (inter, intra) = wide_rates();
    let shipments = vec![create_shipment("1", 1500., 2., "Клин"), create_shipment("2", 1000., 2., "Клин")];
    let matrix = create_matrix(&[("Тверь", "Клин", 80)]);

    let cost = last_mile_cost(&shipments, "Тверь", &inter, &intra, matrix.row("Тверь")).unwrap();

    assert_eq!(cost, 20. * 80. * 2. + 1500.);
}

#[test]
fn can_skip_flat_fee_when_any_destination_is_far() {
    let (inter, intra) = wide_rates();
    let shipments = vec![create_shipment("1", 2000., 2., "Клин"), create_shipment("2", 1000., 2., "Ржев")];
    let matrix = create_matrix(&[("Тверь", "Клин", 80), ("Тверь", "Ржев", 130)]);

    let cost = last_mile_cost(&shipments, "Тверь", &inter, &intra, matrix.row("Тверь")).unwrap();

    assert_eq!(cost, 20. * (80. + 130.) + 1500.);
}

#[test]
fn can_sum_per_destination_rates_with_single_fixed_fee() {
    let (inter, intra) = wide_rates();
    let shipments = vec![
        create_shipment("1", 500., 1., "Клин"),
        create_shipment("2", 700., 1., "Дубна"),
        create_shipment("3", 300., 1., "Клин"),
    ];
    let matrix = create_matrix(&[("Тверь", "Клин", 60), ("Тверь", "Дубна", 90)]);

    let cost = last_mile_cost(&shipments, "Тверь", &inter, &intra, matrix.row("Тверь")).unwrap();

    assert_eq!(cost, 20. * (60. + 90. + 60.) + 1500.);
}

#[test]
fn can_report_missing_distance() {
    let (inter, intra) = wide_rates();
    let shipments = vec![create_shipment("1", 500., 1., "Калуга")];
    let matrix = create_matrix(&[("Тверь", "Клин", 60)]);

    let result = last_mile_cost(&shipments, "Тверь", &inter, &intra, matrix.row("Тверь"));

    assert_eq!(result.unwrap_err().to_string(), "distance not found for route Тверь -> Калуга");
}

#[test]
fn can_report_missing_distance_on_short_haul_check() {
    let (inter, intra) = wide_rates();
    let shipments = vec![create_shipment("1", 3000., 2., "Калуга")];

    let result = last_mile_cost(&shipments, "Тверь", &inter, &intra, None);

    assert_eq!(result.unwrap_err().to_string(), "distance not found for route Тверь -> Калуга");
}
