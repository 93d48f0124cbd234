pub mod client;
pub mod db;
pub mod server;
pub mod ui;
pub mod validation;
pub mod version;
pub mod web;
