//! Request / response bodies of the public HTTP API.

pub mod api;
