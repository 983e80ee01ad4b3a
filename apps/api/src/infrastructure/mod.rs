pub mod ingest;
pub mod repositories;
