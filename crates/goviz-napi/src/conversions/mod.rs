//! Conversions between goviz types and N-API values.

pub mod error_codes;
