//! Integration tests for ckshow.
//!
//! These tests exercise the public crate surface: argument parsing,
//! checkpoint loading from real on-disk fixtures, and full-run output.

pub mod args_tests;
pub mod ckpt_tests;
pub mod run_tests;
pub mod table_tests;
