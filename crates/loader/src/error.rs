// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Core(#[from] tally_type::Error),

	#[error("csv: {0}")]
	Csv(#[from] csv::Error),

	#[error("cannot read `{}`: {source}", path.display())]
	Io {
		path: PathBuf,
		source: io::Error,
	},
}

impl Error {
	pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Error::Io {
			path: path.into(),
			source,
		}
	}
}
