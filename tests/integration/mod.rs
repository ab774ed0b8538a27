//! Integration tests for realm-admin
//!
//! These tests exercise the public API across module boundaries: the HTTP
//! client against a mock admin API, services over real and in-memory
//! providers, filters over the sample user list, and configuration loading.

pub mod filter_tests;
pub mod identity_client_tests;
pub mod user_detail_tests;
pub mod user_list_tests;
