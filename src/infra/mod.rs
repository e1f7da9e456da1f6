//! Outbound adapters: the price lookup service and affiliate links.

pub mod affiliate;
pub mod pricing;
