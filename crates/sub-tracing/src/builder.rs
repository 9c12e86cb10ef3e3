// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the global tracing subscriber

use std::{
	fmt::{self, Display, Formatter},
	io,
	str::FromStr,
};

use tracing::Level;
use tracing_subscriber::{
	EnvFilter,
	filter::{LevelFilter, ParseError},
	fmt as layer,
	layer::SubscriberExt,
	util::{SubscriberInitExt, TryInitError},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid log directive: {0}")]
	Directive(#[from] ParseError),

	#[error("tracing subscriber already installed: {0}")]
	Init(#[from] TryInitError),

	#[error("unknown log format `{0}`, expected pretty or json")]
	Format(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
	#[default]
	Pretty,
	Json,
}

impl Display for Format {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Format::Pretty => "pretty",
			Format::Json => "json",
		})
	}
}

impl FromStr for Format {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" | "text" => Ok(Format::Pretty),
			"json" => Ok(Format::Json),
			other => Err(Error::Format(other.to_string())),
		}
	}
}

/// Builder for the process-wide `tracing` subscriber. Events go to stderr so
/// report output on stdout stays clean.
pub struct TracingBuilder {
	level: Level,
	format: Format,
	directive: Option<String>,
	with_target: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: Level::WARN,
			format: Format::Pretty,
			directive: None,
			with_target: false,
		}
	}

	/// Maximum level when no directive is given
	pub fn level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	pub fn format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	/// `RUST_LOG` style directive, e.g. `tally_engine=debug,warn`. Takes
	/// precedence over [`TracingBuilder::level`].
	pub fn directive(mut self, directive: impl Into<String>) -> Self {
		self.directive = Some(directive.into());
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub(crate) fn filter(&self) -> Result<EnvFilter, Error> {
		match &self.directive {
			Some(directive) => Ok(EnvFilter::try_new(directive)?),
			None => Ok(EnvFilter::default().add_directive(LevelFilter::from_level(self.level).into())),
		}
	}

	/// Installs the subscriber, failing if one is already installed.
	pub fn try_init(self) -> Result<(), Error> {
		let registry = tracing_subscriber::registry().with(self.filter()?);

		match self.format {
			Format::Pretty => registry
				.with(layer::layer().with_target(self.with_target).with_writer(io::stderr))
				.try_init()?,
			Format::Json => registry
				.with(layer::layer().json().with_target(self.with_target).with_writer(io::stderr))
				.try_init()?,
		}
		Ok(())
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_from_str() {
		assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
		assert_eq!("pretty".parse::<Format>().unwrap(), Format::Pretty);
		assert!("xml".parse::<Format>().is_err());
	}

	#[test]
	fn test_filter_from_level() {
		let filter = TracingBuilder::new().level(Level::DEBUG).filter().unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
	}

	#[test]
	fn test_invalid_directive() {
		let result = TracingBuilder::new().directive("tally_engine=loud").filter();
		assert!(matches!(result, Err(Error::Directive(_))));
	}

	#[test]
	fn test_second_init_fails() {
		assert!(TracingBuilder::new().format(Format::Json).try_init().is_ok());
		assert!(matches!(TracingBuilder::new().try_init(), Err(Error::Init(_))));
	}
}
