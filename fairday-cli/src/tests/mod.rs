//! Shared test harness modules for the Fairday CLI.

use super::*;

mod catalogue_unit;
mod helpers;
mod plan_unit;
