#![warn(missing_docs)]
//! Hestia turns real-estate listing data into oracle request payloads.
//!
//! Each run is one fetch-transform-encode pass: pull a Property record from
//! the listing API, extract the typed fields the request needs, and encode
//! them either as token metadata behind a content-addressed URI or as an ABI
//! tuple for on-chain consumption.

pub mod cmd;
pub mod config;
pub mod encoder;
pub mod extract;
pub mod http_client;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod test_helpers;
