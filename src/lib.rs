//! src/lib.rs
pub mod aggregate;
pub mod configuration;
pub mod error;
pub mod extract;
pub mod functions;
pub mod mappers;
pub mod mapreduce;
pub mod master;
pub mod reducers;
pub mod report;
pub mod sink;
pub mod source;
pub mod splitter;
pub mod startup;
pub mod telemetry;
#[cfg(test)]
mod test_utils;
pub mod worker;
