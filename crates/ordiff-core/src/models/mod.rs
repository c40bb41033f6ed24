//! Data models shared by the extractor, the comparator and their callers.

pub mod config;
pub mod order;
pub mod report;
