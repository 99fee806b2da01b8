//! Dental Chart Studio - GUI Library
//!
//! Interactive dental chart widgets for egui: the chart surface itself,
//! a legend with visibility toggles, and zoom controls, all sharing one
//! [`ChartSession`](state::ChartSession). This module exposes internals
//! for testing.

pub mod app;
pub mod geometry;
pub mod state;
pub mod theme;
pub mod views;
