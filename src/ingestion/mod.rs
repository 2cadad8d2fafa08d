//! Data ingestion module - unifies property-auction listings from
//! heterogeneous JSON sources into one cleaned tabular dataset

pub mod area;
pub mod clean;
pub mod parse;
pub mod pipeline;
pub mod types;
pub mod utils;
pub mod write;

pub use types::*;
