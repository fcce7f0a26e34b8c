use super::*;
use crate::helpers::*;

fn spread_rates() -> Vec<InterCityRate> {
    vec![create_inter_rate(10., 1.5, 30.), create_inter_rate(86., 20., 10.)]
}

#[test]
fn can_average_rates_for_single_terminal() {
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 500)];

    let cost = linehaul_cost(&terminals[0], &terminals, &spread_rates()).unwrap();

    assert_eq!(cost, (30. + 10.) / 2. * 500.);
}

#[test]
fn can_interpolate_rate_between_distance_extremes() {
    let terminals = vec![
        create_terminal("Тверь", "Северо-Запад", 200),
        create_terminal("Казань", "Волга", 800),
        create_terminal("Владимир", "Восток", 500),
    ];

    // The nearest terminal pays the highest rate, the farthest the lowest one.
    let nearest = linehaul_cost(&terminals[0], &terminals, &spread_rates()).unwrap();
    let farthest = linehaul_cost(&terminals[1], &terminals, &spread_rates()).unwrap();
    let middle = linehaul_cost(&terminals[2], &terminals, &spread_rates()).unwrap();

    assert_eq!(nearest, 30. * 200.);
    assert_eq!(farthest, 10. * 800.);
    assert_eq!(middle, 20. * 500.);
}

#[test]
fn can_use_common_rate_when_rates_are_equal() {
    let rates = vec![create_inter_rate(10., 1.5, 25.), create_inter_rate(86., 20., 25.)];
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 300), create_terminal("Казань", "Волга", 700)];

    for terminal in &terminals {
        let cost = linehaul_cost(terminal, &terminals, &rates).unwrap();
        assert_eq!(cost, 25. * f64::from(terminal.distance_from_moscow_km));
    }
}

#[test]
fn can_reject_empty_rates() {
    let terminals = vec![create_terminal("Тверь", "Северо-Запад", 500)];

    let result = linehaul_cost(&terminals[0], &terminals, &[]);

    assert_eq!(result.unwrap_err().to_string(), "inter-city rates list is empty");
}

#[test]
fn can_reject_empty_terminals() {
    let terminal = create_terminal("Тверь", "Северо-Запад", 500);

    let result = linehaul_cost(&terminal, &[], &spread_rates());

    assert_eq!(result.unwrap_err().to_string(), "terminals list is empty");
}
