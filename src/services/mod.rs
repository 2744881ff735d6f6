//! Services for data loading and aggregation

pub mod aggregator;
pub mod data_loader;

pub use aggregator::Aggregator;
pub use data_loader::DataLoaderService;
