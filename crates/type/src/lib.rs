// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::{Date, DateTime, OrderedF64, Type, Value};
