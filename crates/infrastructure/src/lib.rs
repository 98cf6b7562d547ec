//! Ferrous Backup Infrastructure Layer
pub mod dump;
pub mod reporting;
pub mod storage;
