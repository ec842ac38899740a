//! Wire contracts between the inventory client and the REST API.
//!
//! Field names follow the server's JSON exactly: inventory aggregates are
//! camelCase, system records (users, notifications, logs) are snake_case.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
