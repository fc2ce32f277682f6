pub mod bpo_daily_metrics;
pub mod carriers;
pub mod freight_kpi_daily;
pub mod hotel_daily_reports;
pub mod hotel_disputes;
pub mod hotel_kpi_daily;
pub mod hotel_properties;
pub mod hotel_reviews;
pub mod import_jobs;
pub mod import_mappings;
pub mod loads;
pub mod logistics_shippers;
pub mod ventures;
