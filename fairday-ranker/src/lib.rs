//! Best-day ranking engine for Fairday.
//!
//! This crate provides [`BestDaysPlanner`], the default implementation of the
//! [`Planner`](fairday_core::Planner) trait. For one `(city, event, month,
//! year)` query it selects the city's observations from an
//! [`ObservationStore`](fairday_core::ObservationStore), scores each day with
//! a [`Scorer`](fairday_core::Scorer), keeps the highest-scoring days and,
//! when a classifier is configured, labels each surviving day.
//!
//! Classification never fails a plan: if the configured classifier reports
//! itself unavailable, the rule-based classifier answers for that day.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod planner;

pub use planner::{BestDaysPlanner, PlannerConfig};
