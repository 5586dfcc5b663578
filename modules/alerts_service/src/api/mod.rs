//! Module API surfaces

pub mod native;
