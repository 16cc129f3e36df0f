//! Process-level configuration shared by the application and the adapter.

pub mod config;
