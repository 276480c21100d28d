//! Integration tests for the shift schedule converter.
//!
//! This suite covers:
//! - End-to-end conversion through the HTTP API
//! - Lookup sheets parsed from CSV text
//! - Download workbook layout
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shift_converter::api::{create_router, AppState};
use shift_converter::config::{ConfigLoader, TaskCodeSettings};
use shift_converter::conversion::{
    build_download_grid, convert, default_keyword_rules, resolve_employees, resolve_task_codes,
    Cutoffs,
};
use shift_converter::models::{Grid, Period, ShiftBucket};
use shift_converter::sheets::{decode_sheet, encode_grid, parse_csv};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/converter.yaml").expect("Failed to load config");
    create_router(AppState::new(config).expect("Failed to build state"))
}

fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// A February 2024 schedule: header plus three employees.
fn february_schedule() -> Grid {
    let mut header = vec!["氏名".to_string()];
    header.extend((1..=29).map(|d| d.to_string()));

    let mut yamada = vec![String::new(); 30];
    yamada[0] = "山田".to_string();
    yamada[1] = "930".to_string();
    yamada[2] = "休".to_string();
    yamada[29] = "1300".to_string();

    let mut sato = vec![String::new(); 12];
    sato[0] = "佐藤".to_string();
    sato[10] = "1100".to_string();
    sato[11] = "1050".to_string();

    let blank = vec![String::new(), "930".to_string()];

    vec![header, yamada, sato, blank]
}

async fn post_convert(router: Router, query: &str, workbook: Vec<u8>) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/convert?{}", query))
                .header("Content-Type", "application/octet-stream")
                .body(Body::from(workbook))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_download(router: Router, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/download")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

// =============================================================================
// End-to-end conversion
// =============================================================================

#[tokio::test]
async fn test_convert_february_schedule_without_lookups() {
    let workbook = encode_grid(&february_schedule(), "シフト表").unwrap();
    let (status, body) = post_convert(create_router_for_test(), "year=2024&month=2", workbook).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "records": [
                {"date": "2024-02-01", "employeeId": "山田", "taskCode": "管理早番"},
                {"date": "2024-02-29", "employeeId": "山田", "taskCode": "管理遅番"},
                {"date": "2024-02-10", "employeeId": "佐藤", "taskCode": "管理中番"},
                {"date": "2024-02-11", "employeeId": "佐藤", "taskCode": "管理早番"}
            ]
        })
    );
}

#[tokio::test]
async fn test_convert_drops_leap_day_in_common_year() {
    let workbook = encode_grid(&february_schedule(), "シフト表").unwrap();
    let (status, body) = post_convert(create_router_for_test(), "year=2023&month=2", workbook).await;

    assert_eq!(status, StatusCode::OK);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["date"] != "2023-02-29"));
}

#[tokio::test]
async fn test_convert_with_request_cutoffs() {
    let workbook = encode_grid(&february_schedule(), "シフト表").unwrap();
    let (status, body) = post_convert(
        create_router_for_test(),
        "year=2024&month=2&early_cutoff=900&late_cutoff=1000",
        workbook,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["taskCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["管理中番", "管理遅番", "管理遅番", "管理遅番"]);
}

#[tokio::test]
async fn test_convert_rejects_non_numeric_cutoff() {
    let workbook = encode_grid(&february_schedule(), "シフト表").unwrap();
    let (status, body) = post_convert(
        create_router_for_test(),
        "year=2024&month=2&early_cutoff=morning",
        workbook,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_convert_rejects_non_workbook_body() {
    let (status, body) = post_convert(
        create_router_for_test(),
        "year=2024&month=2",
        b"name,1,2\n".to_vec(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INPUT_MISSING");
}

// =============================================================================
// Lookups from CSV exports
// =============================================================================

#[test]
fn test_csv_lookups_drive_conversion() {
    let employees = parse_csv("氏名,社員番号\n山田,E100\n佐藤,E200\n,E300\n").unwrap();
    let tasks = parse_csv(
        "作業名,コード,備考\n\
         清掃,C01,\n\
         管理 (morning),A01,\n\
         管理,A02,\n\
         \"管理, evening\",A03,\n",
    )
    .unwrap();

    let output = convert(
        Some(&february_schedule()),
        Some(&employees),
        Some(&tasks),
        &TaskCodeSettings::default(),
        Period::new(2024, 2).unwrap(),
        Cutoffs::parse("1050", "1150").unwrap(),
    )
    .unwrap();

    let summary: Vec<(String, &str, &str)> = output
        .records
        .iter()
        .map(|r| (r.date.to_string(), r.employee_id.as_str(), r.task_code.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2024-02-01".to_string(), "E100", "A01"),
            ("2024-02-29".to_string(), "E100", "A03"),
            ("2024-02-10".to_string(), "E200", "A02"),
            ("2024-02-11".to_string(), "E200", "A01"),
        ]
    );
}

#[test]
fn test_employee_lookup_skips_header_and_blanks() {
    let mapping = resolve_employees(&grid(&[
        &["H1", "H2"],
        &["Alice", "E001"],
        &["", "E002"],
        &["Bob", ""],
    ]));

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("Alice"), Some("E001"));
}

#[test]
fn test_task_lookup_positional_and_keyword_rows() {
    let codes = resolve_task_codes(
        &grid(&[
            &["管理 night", "N-1"],
            &["管理", "P-1"],
            &["管理", "P-2"],
        ]),
        "管理",
        &default_keyword_rules(),
    );

    assert_eq!(codes.code_for(ShiftBucket::Early), Some("P-1"));
    assert_eq!(codes.code_for(ShiftBucket::Middle), Some("P-2"));
    assert_eq!(codes.code_for(ShiftBucket::Late), Some("N-1"));
}

// =============================================================================
// Download
// =============================================================================

#[test]
fn test_download_grid_has_one_row_per_record_plus_header() {
    let output = convert(
        Some(&february_schedule()),
        None,
        None,
        &TaskCodeSettings::default(),
        Period::new(2024, 2).unwrap(),
        Cutoffs::parse("1050", "1150").unwrap(),
    )
    .unwrap();

    let download = build_download_grid(&output.records);
    assert_eq!(download.len(), output.records.len() + 1);
}

#[tokio::test]
async fn test_download_round_trips_converted_records() {
    let workbook = encode_grid(&february_schedule(), "シフト表").unwrap();
    let (_, converted) = post_convert(create_router_for_test(), "year=2024&month=2", workbook).await;

    let (status, bytes) = post_download(create_router_for_test(), converted.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let sheet = decode_sheet(&bytes, "records").unwrap();
    let records = converted["records"].as_array().unwrap();
    assert_eq!(sheet.len(), records.len() + 1);
    assert_eq!(sheet[0], vec!["date", "employeeId", "taskCode"]);
    assert_eq!(sheet[1], vec!["2024-02-01", "山田", "管理早番"]);
}

#[tokio::test]
async fn test_download_rejects_missing_records() {
    let (status, bytes) = post_download(create_router_for_test(), json!({"rows": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_OUTPUT_REQUEST");
}

#[tokio::test]
async fn test_download_rejects_bad_record_date() {
    let (status, _) = post_download(
        create_router_for_test(),
        json!({"records": [{"date": "2024-02-30", "employeeId": "E1", "taskCode": "A"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
