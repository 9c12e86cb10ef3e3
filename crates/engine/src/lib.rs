// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod aggregate;
pub mod config;
pub mod distribution;
pub mod engine;
pub mod rank;
pub mod report;
pub mod resample;
pub mod summary;

pub use aggregate::{Aggregate, AliasedAggregate, aggregate};
pub use config::ReportConfig;
pub use engine::{Engine, Report};
pub use resample::Bucket;
pub use summary::Summary;
pub use tally_type::{Error, Result};
