// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod avg;
mod count;
mod count_distinct;
mod mode;
mod sum;

pub use avg::Avg;
pub use count::Count;
pub use count_distinct::CountDistinct;
pub use mode::{Mode, mode_of};
pub use sum::Sum;
