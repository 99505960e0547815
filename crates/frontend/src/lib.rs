//! Yew front end for Tick
//!
//! The session controller, route guard, and API wiring live under [`auth`],
//! [`routes`], and [`client`]; everything else is presentational glue over
//! the `tick-client` subsystem.

pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod services;
pub mod storage;

pub use app::App;
