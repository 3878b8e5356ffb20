//! Unit tests for the coordinate module

mod bbox_tests;
