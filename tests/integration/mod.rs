//! Integration tests

mod access_tests;
mod config_tests;
