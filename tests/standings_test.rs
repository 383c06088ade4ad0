use eredivisie_scraper::{
    extract,
    frame::{coerce_columns, to_record_batch, ColumnType},
    ExtractionError, StructureError,
};
use std::collections::BTreeMap;

const RESULTS: &str = "<table><tr><th>Team</th><th>Pts</th></tr>\
    <tr><td> Ajax </td><td>10</td></tr>\
    <tr><td>PSV</td><td> 8</td></tr></table>";

/// A page laid out like the standings site: a few layout tables, then results.
fn page(layout_tables: usize, results: &str) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><title>Uitslagen</title></head><body>\n",
    );
    for i in 0..layout_tables {
        html.push_str(&format!(
            "<table width=\"100%\" id=\"layout{i}\"><tr><th>Menu {i}</th></tr><tr><td>link</td></tr></table>\n"
        ));
    }
    html.push_str(results);
    html.push_str("\n<table><tr><th>Footer</th></tr></table></body></html>");
    html
}

#[test]
fn extract_returns_fifth_table_columns_and_rows() {
    let ds = extract(&page(4, RESULTS)).expect("standings should extract");
    assert_eq!(ds.columns(), ["Team", "Pts"]);
    assert_eq!(ds.rows().len(), 2);
    assert_eq!(ds.rows()[0], ["Ajax", "10"]);
    assert_eq!(ds.rows()[1], ["PSV", "8"]);
}

#[test]
fn extract_fails_with_structure_error_on_two_tables() {
    let html = "<table><tr><th>a</th></tr></table><table><tr><th>b</th></tr></table>";
    match extract(html) {
        Err(ExtractionError::Structure(StructureError::TooFewTables { found, index })) => {
            assert_eq!((found, index), (2, 4));
        }
        other => panic!("expected TooFewTables, got {other:?}"),
    }
}

#[test]
fn shifted_layout_picks_whatever_is_fifth() {
    // one extra layout table pushes the results to 6th place
    let ds = extract(&page(5, RESULTS)).expect("fifth table exists");
    assert_eq!(ds.columns(), ["Menu 4"]);
    assert_eq!(ds.rows(), [vec!["link".to_string()]]);
}

#[test]
fn irregular_row_surfaces_when_binding() {
    let results = "<table><tr><th>Team</th><th>Pts</th></tr>\
        <tr><td>Ajax</td><td>10</td></tr>\
        <tr><td colspan=\"2\">Vitesse (licentie ingetrokken)</td></tr></table>";
    let ds = extract(&page(4, results)).expect("extraction does not check widths");
    assert_eq!(ds.num_rows(), 2);

    match to_record_batch(&ds) {
        Err(ExtractionError::Shape(e)) => {
            assert_eq!((e.row, e.expected, e.found), (1, 2, 1));
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn bind_and_coerce_points() {
    let ds = extract(&page(4, RESULTS)).unwrap();
    let batch = to_record_batch(&ds).unwrap();
    let types = BTreeMap::from([("Pts".to_string(), ColumnType::Int64)]);
    let typed = coerce_columns(&batch, &types).unwrap();
    assert_eq!(typed.num_rows(), 2);
    assert_eq!(
        typed.schema().field(1).data_type(),
        &arrow::datatypes::DataType::Int64
    );
}
