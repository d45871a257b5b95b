pub mod common;
pub mod dashboard;
pub mod call_test;
