pub mod memory_locode_repository;
