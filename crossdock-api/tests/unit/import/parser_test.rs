use super::*;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[test]
fn can_parse_valid_shipment_rows() {
    let rows = vec![
        row(&["ID", "Вес", "М3", "Город", "", "", "", "Дата"]),
        row(&["SHP-1", "1000", "2.5", "Тверь", "", "", "", "2024-07-01"]),
        row(&["SHP-2", "500", "1", " Клин ", "", "", "", "05.08.2024"]),
    ];

    let shipments = parse_shipments(&rows);

    assert_eq!(shipments.len(), 2);
    assert_eq!(shipments[0].id, "SHP-1");
    assert_eq!(shipments[0].weight_kg, 1000.);
    assert_eq!(shipments[0].volume_m3, 2.5);
    assert_eq!(shipments[0].date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    assert_eq!(shipments[1].destination_city, "Клин");
    assert_eq!(shipments[1].date, NaiveDate::from_ymd_opt(2024, 8, 5).unwrap());
}

#[test]
fn can_skip_malformed_shipment_rows() {
    let rows = vec![
        row(&["ID", "Вес", "М3", "Город", "", "", "", "Дата"]),
        row(&["BAD-WEIGHT", "heavy", "2", "Тверь", "", "", "", "2024-07-01"]),
        row(&["BAD-SIGN", "-10", "2", "Тверь", "", "", "", "2024-07-01"]),
        row(&["BAD-VOLUME", "100", "0", "Тверь", "", "", "", "2024-07-01"]),
        row(&["BAD-DATE", "100", "2", "Тверь", "", "", "", "someday"]),
        row(&["SHORT", "100", "2", "Тверь"]),
        row(&["OK", "100", "2", "Тверь", "", "", "", "2024-07-01"]),
    ];

    let shipments = parse_shipments(&rows);

    assert_eq!(shipments.len(), 1);
    assert_eq!(shipments[0].id, "OK");
}

#[test]
fn can_parse_dates_in_known_formats() {
    for (value, expected) in [
        ("2024-07-01", (2024, 7, 1)),
        ("05.08.2024", (2024, 8, 5)),
        ("05.08.24", (2024, 8, 5)),
        ("2-Jan-06", (2006, 1, 2)),
        ("1/2/06", (2006, 1, 2)),
        ("2. January 2006", (2006, 1, 2)),
        ("05.авг.2024", (2024, 8, 5)),
        ("5.АВГ.24", (2024, 8, 5)),
    ] {
        let expected = NaiveDate::from_ymd_opt(expected.0, expected.1, expected.2).unwrap();
        assert_eq!(parse_flexible_date(value), Some(expected), "value: {value}");
    }
}

#[test]
fn can_reject_unparsable_dates() {
    for value in ["", "someday", "32.13.2024", "05.xyz.2024"] {
        assert_eq!(parse_flexible_date(value), None, "value: {value}");
    }
}

#[test]
fn can_parse_terminal_rows() {
    let rows = vec![
        row(&["#", "Город", "Направление", "Расстояние", "Прим."]),
        row(&["1", "Тверь", "Северо-Запад", "180", ""]),
        row(&["2", "", "Волга", "800", ""]),
        row(&["3", "Казань", "", "800", ""]),
        row(&["4", "Рязань", "Юг", "-5", ""]),
        row(&["5", "Владимир", "Восток", "далеко", ""]),
    ];

    let terminals = parse_terminals(&rows);

    assert_eq!(terminals.len(), 1);
    assert_eq!(terminals[0].city, "Тверь");
    assert_eq!(terminals[0].direction, "Северо-Запад");
    assert_eq!(terminals[0].distance_from_moscow_km, 180);
}

#[test]
fn can_parse_tariff_sheet_with_decimal_commas() {
    let rows = vec![
        row(&["Тариф", "", ""]),
        row(&["Объем", "10", "20,5"]),
        row(&["Масса", "1,5", "3"]),
        row(&["Тариф", "30", "25"]),
    ];

    let bands = parse_tariff_sheet(&rows).unwrap();

    assert_eq!(bands, vec![(10., 1.5, 30.), (20.5, 3., 25.)]);
}

#[test]
fn can_reject_mismatched_tariff_rows() {
    let rows = vec![
        row(&["Тариф", "", ""]),
        row(&["Объем", "10", "20"]),
        row(&["Масса", "1,5"]),
        row(&["Тариф", "30", "25"]),
    ];

    assert!(parse_tariff_sheet(&rows).is_err());
}

#[test]
fn can_skip_truncated_tariff_sheet() {
    let rows = vec![row(&["Тариф"]), row(&["Объем", "10"])];

    assert_eq!(parse_tariff_sheet(&rows).unwrap(), vec![]);
}

#[test]
fn can_parse_distance_matrix_sheet() {
    let rows = vec![
        row(&["", "Тверь", "Клин"]),
        row(&["Тверь", "0", "120"]),
        row(&["Клин", "120", "0"]),
    ];

    let distances = parse_distance_sheet(&rows);

    assert_eq!(distances.len(), 4);
    assert_eq!(distances[0].from_city, "Тверь");
    assert_eq!(distances[0].to_city, "Тверь");
    assert_eq!(distances[0].km, 0);
    assert_eq!(distances[1].to_city, "Клин");
    assert_eq!(distances[1].km, 120);
}

#[test]
fn can_skip_unparsable_distance_cells() {
    let rows = vec![
        row(&["", "Тверь", "Клин"]),
        row(&["Тверь", "0", "n/a"]),
    ];

    let distances = parse_distance_sheet(&rows);

    assert_eq!(distances.len(), 1);
    assert_eq!(distances[0].to_city, "Тверь");
}

#[test]
fn can_keep_negative_distances_for_integrity_checks() {
    // Negative distances are rejected by the store's CHECK constraint, not by the parser.
    let rows = vec![row(&["", "Тверь"]), row(&["Тверь", "-5"])];

    let distances = parse_distance_sheet(&rows);

    assert_eq!(distances.len(), 1);
    assert_eq!(distances[0].km, -5);
}
