use super::*;
use crossdock_core::prelude::PlanSolution;

#[test]
fn can_map_transport_classes_to_wire_names() {
    for (class, expected) in [
        (TransportClass::T1_5, "TRANSPORT_1_5T_10M3"),
        (TransportClass::T3, "TRANSPORT_3T_20M3"),
        (TransportClass::T5, "TRANSPORT_5T_36M3"),
        (TransportClass::T10, "TRANSPORT_10T_45M3"),
        (TransportClass::T20, "TRANSPORT_20T_86M3"),
    ] {
        assert_eq!(transport_wire_name(class), expected);
    }
}

#[test]
fn can_parse_wire_enums() {
    assert_eq!(parse_selection("SELECTION_RANK"), Some(SelectionKind::Rank));
    assert_eq!(parse_crossover("CROSSOVER_TWO_POINT"), Some(CrossoverKind::TwoPoint));
    assert_eq!(parse_mutation("MUTATION_INVERSION"), Some(MutationKind::Inversion));

    assert_eq!(parse_selection("SELECTION_BEST"), None);
    assert_eq!(parse_crossover(""), None);
    assert_eq!(parse_mutation("mutation_swap"), None);
}

#[test]
fn can_build_response_from_solution() {
    let solution = PlanSolution {
        routes: vec![Route {
            from_city: "Москва".to_string(),
            to_terminal: "Тверь".to_string(),
            shipment_ids: vec!["SHP-1".to_string()],
            cost: 0.,
            transport_used: TransportClass::T3,
        }],
        cost: CostBreakdown { linehaul_cost: 5400., last_mile_cost: 2000., penalty_cost: 0., total_cost: 7400. },
        active_terminals: vec!["Тверь".to_string()],
        generation: 0,
        fitness_score: 7400.,
    };

    let response = OptimizeResponse::from_solution(&solution);

    assert!(response.success);
    assert_eq!(response.message, "Optimization completed successfully");
    assert_eq!(response.results.len(), 1);
    assert!(!response.solution_id.is_empty());

    let result = &response.results[0];
    assert_eq!(result.fitness_score, 7400.);
    assert_eq!(result.cost.total_cost, 7400.);
    assert_eq!(result.active_terminals, vec!["Тверь".to_string()]);
    assert_eq!(result.routes[0].transport_used, "TRANSPORT_3T_20M3");
    assert_eq!(result.routes[0].cost, 0.);
}

#[test]
fn can_decode_optimize_request_with_missing_fields() {
    let request: OptimizeRequest = serde_json::from_str("{}").unwrap();

    assert_eq!(request.direction, "");
    assert!(request.delivery_days.is_empty());
    assert!(request.ga_settings_level_1.is_none());
}

#[test]
fn can_decode_full_optimize_request() {
    let request: OptimizeRequest = serde_json::from_str(
        r#"{
            "direction": "Восток",
            "delivery_days": ["mon", "fri"],
            "ga_settings_level_1": {
                "num_generations": 100,
                "num_individuals": 20,
                "stopping_criterion": 5,
                "selection_type": "SELECTION_TOURNAMENT",
                "crossover_type": "CROSSOVER_UNIFORM",
                "mutation_type": "MUTATION_SWAP"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(request.direction, "Восток");
    assert_eq!(request.delivery_days, vec!["mon".to_string(), "fri".to_string()]);
    let settings = request.ga_settings_level_1.unwrap();
    assert_eq!(settings.num_generations, 100);
    assert_eq!(settings.selection_type, "SELECTION_TOURNAMENT");
}
