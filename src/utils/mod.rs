//! Utility modules for common functionality

pub mod logger;
