use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use sea_orm_migration::MigratorTrait;
use std::collections::HashMap;
use tempfile::TempDir;

use siox_import::database::entities::{
    hotel_daily_reports, hotel_disputes, hotel_kpi_daily, hotel_properties, import_jobs, loads,
    ventures,
};
use siox_import::database::migrations::Migrator;
use siox_import::import::{ImportType, MappingOptions};
use siox_import::services::{
    CommitService, FixedVentureResolver, ImportJobService, SetMappingRequest, ValidationService,
};
use std::sync::Arc;

async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seed_logistics_venture(db: &DatabaseConnection) -> i32 {
    let venture = ventures::ActiveModel {
        name: Set("Siox Freight".into()),
        venture_type: Set("LOGISTICS".into()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    venture.insert(db).await.unwrap().id
}

async fn seed_hotel_property(db: &DatabaseConnection, id: i32) -> i32 {
    let venture = ventures::ActiveModel {
        name: Set("Siox Hotels".into()),
        venture_type: Set("HOTELS".into()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let venture_id = venture.insert(db).await.unwrap().id;

    let property = hotel_properties::ActiveModel {
        id: Set(id),
        venture_id: Set(venture_id),
        name: Set(format!("Property {}", id)),
        city: Set(None),
        state: Set(None),
        created_at: Set(Utc::now()),
    };
    property.insert(db).await.unwrap().id
}

fn mapping_request(pairs: &[(&str, &str)]) -> SetMappingRequest {
    let column_to_field: HashMap<String, String> = pairs
        .iter()
        .map(|(col, field)| (col.to_string(), field.to_string()))
        .collect();
    SetMappingRequest {
        job_type: None,
        column_to_field: Some(column_to_field),
        options: MappingOptions::default(),
        save_as_template: false,
        name: None,
    }
}

async fn upload_and_map(
    service: &ImportJobService,
    import_type: ImportType,
    csv: &str,
    pairs: &[(&str, &str)],
) -> i32 {
    let report = service
        .create_job(import_type, "data.csv", Some("text/csv".into()), csv.as_bytes(), None)
        .await
        .unwrap();

    let mut request = mapping_request(pairs);
    request.job_type = Some(import_type.as_str().to_string());
    service.set_mapping(report.job_id, request).await.unwrap();
    report.job_id
}

#[tokio::test]
async fn loads_round_trip_imports_all_rows_and_deletes_file() {
    let db = setup_db().await;
    seed_logistics_venture(&db).await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "Ref,Pickup,Shipper\n\
               LD-1,1/15/2024,Acme\n\
               LD-2,2024-01-16,Globex\n\
               LD-3,2024-01-17,Initech\n";
    let job_id = upload_and_map(
        &jobs,
        ImportType::Loads,
        csv,
        &[("Ref", "referenceNumber"), ("Pickup", "pickupDate"), ("Shipper", "shipperName")],
    )
    .await;

    let report = ValidationService::new(db.clone()).validate(job_id).await.unwrap();
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.valid_rows, 3);
    assert_eq!(report.invalid_rows, 0);

    let file_path = jobs.get_job(job_id).await.unwrap().file_path;
    assert!(std::path::Path::new(&file_path).exists());

    let commit = CommitService::new(db.clone()).commit(job_id).await.unwrap();
    assert!(commit.success);
    assert_eq!(commit.success_count, 3);
    assert_eq!(commit.error_count, 0);

    let job = jobs.get_job(job_id).await.unwrap();
    assert_eq!(job.status, "IMPORTED");
    assert_eq!(job.success_count, 3);
    assert!(!std::path::Path::new(&file_path).exists());

    let imported = loads::Entity::find().all(&db).await.unwrap();
    assert_eq!(imported.len(), 3);
    let first = imported
        .iter()
        .find(|l| l.reference == "LD-1")
        .expect("LD-1 imported");
    assert_eq!(
        first.pickup_date,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    );
    assert_eq!(first.load_status, "OPEN");
}

#[tokio::test]
async fn hotel_kpi_validation_reports_mixed_rows() {
    let db = setup_db().await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "date,hotelId,occupancy\n\
               2024-01-01,5,72.5\n\
               13/45/2024,5,bad\n";
    let job_id = upload_and_map(
        &jobs,
        ImportType::HotelKpis,
        csv,
        &[("date", "date"), ("hotelId", "hotelId"), ("occupancy", "occupancy")],
    )
    .await;

    let validation = ValidationService::new(db.clone());
    let report = validation.validate(job_id).await.unwrap();

    assert_eq!(report.total_rows, 2);
    assert_eq!(report.valid_rows, 1);
    assert_eq!(report.invalid_rows, 1);

    // Every reported problem is on the second data row, and both the date
    // and the occupancy columns are cited.
    assert!(report.errors.iter().all(|e| e.row == 3));
    assert!(report.errors.iter().any(|e| e.column == "date"));
    assert!(report.errors.iter().any(|e| e.column == "occupancy"));
    assert_eq!(report.preview.len(), 1);

    // Re-running validation is a pure recompute with identical counts.
    let again = validation.validate(job_id).await.unwrap();
    assert_eq!(again.valid_rows, report.valid_rows);
    assert_eq!(again.invalid_rows, report.invalid_rows);

    let job = jobs.get_job(job_id).await.unwrap();
    assert_eq!(job.status, "VALIDATED");
    assert_eq!(job.success_count, 1);
    assert_eq!(job.error_count, 1);
    assert!(job.error_rows.is_some());
}

#[tokio::test]
async fn hotel_daily_commit_flags_high_loss_and_syncs_kpis() {
    let db = setup_db().await;
    let hotel_id = seed_hotel_property(&db, 1).await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    // lostDues/total = 6%, above the 5% ratio threshold even though the
    // absolute amount stays under 100.
    let csv = "date,hotelId,totalRoom,roomSold,total,lostDues\n\
               2024-03-01,1,20,10,1000,60\n";
    let job_id = upload_and_map(
        &jobs,
        ImportType::HotelDaily,
        csv,
        &[
            ("date", "date"),
            ("hotelId", "hotelId"),
            ("totalRoom", "totalRoom"),
            ("roomSold", "roomSold"),
            ("total", "total"),
            ("lostDues", "lostDues"),
        ],
    )
    .await;

    ValidationService::new(db.clone()).validate(job_id).await.unwrap();
    let commit = CommitService::new(db.clone()).commit(job_id).await.unwrap();
    assert_eq!(commit.success_count, 1);
    assert_eq!(commit.error_count, 0);

    let report = hotel_daily_reports::Entity::find()
        .filter(hotel_daily_reports::Column::HotelId.eq(hotel_id))
        .one(&db)
        .await
        .unwrap()
        .expect("daily report row");
    assert!(report.high_loss_flag);
    // Net ADR: (1000 - 60) / 10 rooms sold.
    assert_eq!(report.adr, Some(94.0));

    let kpi = hotel_kpi_daily::Entity::find()
        .filter(hotel_kpi_daily::Column::HotelId.eq(hotel_id))
        .one(&db)
        .await
        .unwrap()
        .expect("denormalised kpi row");
    assert_eq!(kpi.occupancy_pct, Some(50.0));
    assert_eq!(kpi.total_revenue, Some(1000.0));
    assert_eq!(kpi.revpar, Some(47.0));
}

#[tokio::test]
async fn dispute_commit_keeps_guest_contact_and_normalises_channel() {
    let db = setup_db().await;
    seed_hotel_property(&db, 1).await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "propertyId,type,disputedAmount,guestName,guestPhone,channel\n\
               1,CHARGEBACK,250.00,Jane Doe,555-123-4567,EXPEDIA\n";
    let job_id = upload_and_map(
        &jobs,
        ImportType::HotelDisputes,
        csv,
        &[
            ("propertyId", "propertyId"),
            ("type", "type"),
            ("disputedAmount", "disputedAmount"),
            ("guestName", "guestName"),
            ("guestPhone", "guestPhone"),
            ("channel", "channel"),
        ],
    )
    .await;

    ValidationService::new(db.clone()).validate(job_id).await.unwrap();
    let commit = CommitService::new(db.clone()).commit(job_id).await.unwrap();
    assert_eq!(commit.success_count, 1);
    assert_eq!(commit.error_count, 0);

    let dispute = hotel_disputes::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("dispute row");
    assert_eq!(dispute.dispute_type, "CHARGEBACK");
    assert_eq!(dispute.status, "NEW");
    assert_eq!(dispute.disputed_amount, Some(250.0));
    assert_eq!(dispute.guest_name, Some("Jane Doe".to_string()));
    assert_eq!(dispute.guest_phone, Some("555-123-4567".to_string()));
    assert_eq!(dispute.channel, Some("OTA".to_string()));
}

#[tokio::test]
async fn unresolvable_hotel_id_is_a_row_error_not_a_batch_failure() {
    let db = setup_db().await;
    seed_hotel_property(&db, 1).await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "date,hotelId,occupancy\n\
               2024-02-01,1,70\n\
               2024-02-01,999,60\n";
    let job_id = upload_and_map(
        &jobs,
        ImportType::HotelKpis,
        csv,
        &[("date", "date"), ("hotelId", "hotelId"), ("occupancy", "occupancy")],
    )
    .await;

    ValidationService::new(db.clone()).validate(job_id).await.unwrap();
    let commit = CommitService::new(db.clone()).commit(job_id).await.unwrap();

    assert_eq!(commit.success_count, 1);
    assert_eq!(commit.error_count, 1);
    assert!(commit.errors[0].message.contains("Hotel property 999 not found"));

    let job = jobs.get_job(job_id).await.unwrap();
    assert_eq!(job.status, "IMPORTED");

    let rows = hotel_kpi_daily::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hotel_id, 1);
}

#[tokio::test]
async fn second_commit_is_rejected() {
    let db = setup_db().await;
    let venture_id = seed_logistics_venture(&db).await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "Ref\nLD-1\n";
    let job_id = upload_and_map(&jobs, ImportType::Loads, csv, &[("Ref", "referenceNumber")]).await;

    let validation = ValidationService::new(db.clone());
    validation.validate(job_id).await.unwrap();

    let commits =
        CommitService::with_resolver(db.clone(), Arc::new(FixedVentureResolver(venture_id)));
    commits.commit(job_id).await.unwrap();

    let err = commits.commit(job_id).await.unwrap_err();
    assert!(err.is_conflict());

    let imported = loads::Entity::find().all(&db).await.unwrap();
    assert_eq!(imported.len(), 1);
}

#[tokio::test]
async fn stages_out_of_order_are_rejected() {
    let db = setup_db().await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let report = jobs
        .create_job(
            ImportType::Loads,
            "data.csv",
            Some("text/csv".into()),
            b"Ref\nLD-1\n",
            None,
        )
        .await
        .unwrap();

    // Validate before mapping.
    let err = ValidationService::new(db.clone())
        .validate(report.job_id)
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    // Commit before validation.
    let mut request = mapping_request(&[("Ref", "referenceNumber")]);
    request.job_type = Some("LOADS".to_string());
    jobs.set_mapping(report.job_id, request).await.unwrap();

    let err = CommitService::new(db.clone()).commit(report.job_id).await.unwrap_err();
    assert!(err.is_conflict());

    let job = jobs.get_job(report.job_id).await.unwrap();
    assert_eq!(job.status, "MAPPED");
}

#[tokio::test]
async fn upload_with_no_columns_creates_no_job() {
    let db = setup_db().await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let err = jobs
        .create_job(ImportType::Loads, "empty.csv", Some("text/csv".into()), b"", None)
        .await
        .unwrap_err();
    assert!(err.is_client_error());

    let stored = import_jobs::Entity::find().all(&db).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn saved_template_is_suggested_for_matching_columns() {
    let db = setup_db().await;
    let upload_dir = TempDir::new().unwrap();
    let jobs = ImportJobService::new(db.clone(), upload_dir.path());

    let csv = "Ref,Shipper\nLD-1,Acme\n";
    let report = jobs
        .create_job(ImportType::Loads, "week1.csv", Some("text/csv".into()), csv.as_bytes(), None)
        .await
        .unwrap();
    assert!(report.suggested_mappings.is_empty());
    assert_eq!(report.file_name, "week1.csv");
    assert_eq!(report.sample_rows, vec![vec!["LD-1", "Acme"]]);
    assert_eq!(report.total_rows, 1);

    let mut request = mapping_request(&[("Ref", "referenceNumber"), ("Shipper", "shipperName")]);
    request.job_type = Some("LOADS".to_string());
    request.save_as_template = true;
    request.name = Some("Weekly loads".to_string());
    jobs.set_mapping(report.job_id, request).await.unwrap();

    // A second upload with the same columns sees the saved template.
    let second = jobs
        .create_job(ImportType::Loads, "week2.csv", Some("text/csv".into()), csv.as_bytes(), None)
        .await
        .unwrap();
    assert_eq!(second.suggested_mappings.len(), 1);
    assert_eq!(second.suggested_mappings[0].name, "Weekly loads");

    // A differently-shaped file of the same type does not.
    let other = jobs
        .create_job(
            ImportType::Loads,
            "other.csv",
            Some("text/csv".into()),
            b"A,B,C\n1,2,3\n",
            None,
        )
        .await
        .unwrap();
    assert!(other.suggested_mappings.is_empty());
}
