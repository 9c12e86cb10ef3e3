// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::value::Date;

const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time with nanosecond precision, always in UTC.
///
/// Stored as whole seconds since the Unix epoch plus a nanosecond remainder
/// in `0..1_000_000_000`, so the derived ordering is chronological.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, nanos: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || nanos > 999_999_999 {
			return None;
		}
		let date = Date::new(year, month, day)?;
		let seconds = date.to_days_since_epoch() as i64 * SECONDS_PER_DAY
			+ hour as i64 * 3600
			+ minute as i64 * 60
			+ second as i64;
		Some(Self {
			seconds,
			nanos,
		})
	}

	pub fn from_date(date: Date) -> Self {
		Self {
			seconds: date.to_days_since_epoch() as i64 * SECONDS_PER_DAY,
			nanos: 0,
		}
	}

	pub fn from_timestamp(seconds: i64) -> Self {
		Self {
			seconds,
			nanos: 0,
		}
	}

	/// Seconds since the Unix epoch
	pub fn timestamp(&self) -> i64 {
		self.seconds
	}

	pub fn nanos(&self) -> u32 {
		self.nanos
	}

	pub fn date(&self) -> Date {
		// the range of i32 days covers every i64 second value we can construct
		Date::from_days_since_epoch(self.seconds.div_euclid(SECONDS_PER_DAY) as i32).unwrap_or_default()
	}

	fn seconds_of_day(&self) -> u32 {
		self.seconds.rem_euclid(SECONDS_PER_DAY) as u32
	}

	pub fn hour(&self) -> u32 {
		self.seconds_of_day() / 3600
	}

	pub fn minute(&self) -> u32 {
		(self.seconds_of_day() % 3600) / 60
	}

	pub fn second(&self) -> u32 {
		self.seconds_of_day() % 60
	}

	/// Midnight at the start of this instant's day
	pub fn start_of_day(&self) -> Self {
		Self::from_date(self.date())
	}

	/// Midnight on the Monday of this instant's week
	pub fn start_of_week(&self) -> Self {
		Self::from_date(self.date().start_of_week())
	}

	/// Midnight on the first day of this instant's month
	pub fn start_of_month(&self) -> Self {
		Self::from_date(self.date().start_of_month())
	}
}

impl From<Date> for DateTime {
	fn from(date: Date) -> Self {
		Self::from_date(date)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}T{:02}:{:02}:{:02}", self.date(), self.hour(), self.minute(), self.second())?;
		if self.nanos > 0 {
			write!(f, ".{:09}", self.nanos)?;
		}
		f.write_str("Z")
	}
}

fn parse_component(value: &str, name: &str) -> Result<u32, String> {
	value.trim().parse::<u32>().map_err(|_| format!("invalid {}: {}", name, value))
}

impl FromStr for DateTime {
	type Err = String;

	/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]` and
	/// `YYYY-MM-DDTHH:MM[:SS][.fraction][Z]`
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

		let (date_part, time_part) = match trimmed.find(|c: char| c == 'T' || c == ' ') {
			Some(idx) => (&trimmed[..idx], Some(&trimmed[idx + 1..])),
			None => (trimmed, None),
		};

		let date: Date = date_part.parse()?;
		let Some(time) = time_part else {
			return Ok(Self::from_date(date));
		};

		let (hms, fraction) = match time.split_once('.') {
			Some((hms, fraction)) => (hms, Some(fraction)),
			None => (time, None),
		};

		let mut parts = hms.split(':');
		let hour = parts.next().map(|h| parse_component(h, "hour")).transpose()?.unwrap_or(0);
		let minute = parts.next().map(|m| parse_component(m, "minute")).transpose()?.unwrap_or(0);
		let second = parts.next().map(|s| parse_component(s, "second")).transpose()?.unwrap_or(0);
		if parts.next().is_some() {
			return Err(format!("invalid time: {}", time));
		}

		let nanos = match fraction {
			Some(digits) => {
				if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
					return Err(format!("invalid fractional seconds: {}", digits));
				}
				let padded = format!("{:0<9}", digits);
				parse_component(&padded, "fractional seconds")?
			}
			None => 0,
		};

		DateTime::new(date.year(), date.month(), date.day(), hour, minute, second, nanos)
			.ok_or_else(|| format!("invalid datetime: {}", value))
	}
}

impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		formatter.write_str("a datetime in ISO 8601 format (YYYY-MM-DDTHH:MM:SSZ)")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<DateTime, E> {
		value.parse().map_err(E::custom)
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(DateTimeVisitor)
	}
}
