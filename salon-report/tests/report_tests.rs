//! End-to-end reporting: database -> aggregation -> report file

use salon_common::db::{appointments, clients, connect_readonly, init_database, seed};
use salon_report::{load_data, run_report, PriceTable, ReportOptions, RunOutcome};
use serde_json::Value;
use tempfile::TempDir;

#[tokio::test]
async fn test_empty_database_writes_no_report() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("salon.db");
    let pool = init_database(&db_path).await.unwrap();
    clients::insert_client(&pool, "Thais", None).await.unwrap();

    let data = load_data(&pool).await.unwrap();
    let output = dir.path().join("report.json");

    let outcome = run_report(
        &data,
        &PriceTable::default(),
        &ReportOptions::default(),
        &output,
    )
    .unwrap();

    assert_eq!(outcome, RunOutcome::NoAppointments);
    assert!(!output.exists(), "No report file should be written");
}

#[tokio::test]
async fn test_report_file_contents() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("salon.db");

    let pool = init_database(&db_path).await.unwrap();
    let thais = clients::insert_client(&pool, "Thais", Some("11998765432"))
        .await
        .unwrap();
    appointments::insert_appointment(&pool, thais.id, "Corte de cabelo")
        .await
        .unwrap();
    appointments::insert_appointment(&pool, thais.id, "corte de cabelo")
        .await
        .unwrap();
    pool.close().await;

    let ro = connect_readonly(&db_path).await.unwrap();
    let data = load_data(&ro).await.unwrap();
    let output = dir.path().join("out").join("report.json");

    let outcome = run_report(
        &data,
        &PriceTable::default(),
        &ReportOptions::default(),
        &output,
    )
    .unwrap();
    assert!(matches!(outcome, RunOutcome::Written(_)));

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();

    let services = json["services"].as_array().unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0]["service"], "corte de cabelo");
    assert_eq!(services[0]["count"], 2);
    assert_eq!(services[0]["price"].as_f64(), Some(35.0));
    assert_eq!(services[0]["total_revenue"].as_f64(), Some(70.0));
    assert_eq!(json["total_revenue"].as_f64(), Some(70.0));
    assert_eq!(json["service_counts"]["corte de cabelo"], 2);

    let roster = json["clients"].as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["name"], "Thais");
    assert_eq!(roster[0]["phone"], "11998765432");

    let listing = json["appointments"].as_array().unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["client_name"], "Thais");
    assert!(listing[0]["created_at"].is_string());

    assert_eq!(json["top_clients"][0]["name"], "Thais");
    assert_eq!(json["top_clients"][0]["visits"], 2);
}

#[tokio::test]
async fn test_seeded_database_report() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("salon.db")).await.unwrap();
    seed::reset_with_sample_data(&pool).await.unwrap();

    let data = load_data(&pool).await.unwrap();
    let output = dir.path().join("report.json");
    let options = ReportOptions {
        include_roster: false,
        include_listing: false,
        ..ReportOptions::default()
    };

    let RunOutcome::Written(report) =
        run_report(&data, &PriceTable::default(), &options, &output).unwrap()
    else {
        panic!("Seeded database should produce a report");
    };

    // 2x corte de cabelo (35) + hidratacao (50) + manicure (25)
    assert_eq!(report.total_revenue, 145.0);
    assert_eq!(report.services[0].service, "corte de cabelo");
    assert_eq!(report.services[0].count, 2);
    assert!(report.clients.is_none());

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert!(json.get("clients").is_none());
    assert!(json.get("appointments").is_none());
}
