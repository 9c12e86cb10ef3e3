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

/// A calendar date (year, month, day) without time information. Always
/// interpreted in UTC.
///
/// Internally stored as days since Unix epoch (1970-01-01).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	// Negative values represent dates before 1970
	days_since_epoch: i32,
}

/// Largest absolute year accepted
const MAX_YEAR: i32 = 1_000_000;

// Calendar utilities
impl Date {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(-MAX_YEAR..=MAX_YEAR).contains(&year) {
			return None;
		}
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Howard Hinnant's days_from_civil, with March as month 0
		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i32 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

		Some(era * 146097 + doe - 719468)
	}

	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		}; // [1, 12]
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, String> {
		Self::new(year, month, day).ok_or_else(|| format!("invalid date: {}-{:02}-{:02}", year, month, day))
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}

	/// Day of the week, Monday = 0 through Sunday = 6
	pub fn weekday(&self) -> u32 {
		// 1970-01-01 was a Thursday
		(self.days_since_epoch + 3).rem_euclid(7) as u32
	}

	/// The Monday on or before this date
	pub fn start_of_week(&self) -> Self {
		Self {
			days_since_epoch: self.days_since_epoch - self.weekday() as i32,
		}
	}

	/// The first day of this date's month
	pub fn start_of_month(&self) -> Self {
		let day = self.day();
		Self {
			days_since_epoch: self.days_since_epoch - (day as i32 - 1),
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn from_days_since_epoch(days: i32) -> Option<Self> {
		// Covers every date from year -MAX_YEAR to MAX_YEAR
		if !(-366_000_000..=366_000_000).contains(&days) {
			return None;
		}
		Some(Self {
			days_since_epoch: days,
		})
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl FromStr for Date {
	type Err = String;

	/// Parses `YYYY-MM-DD`
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let mut parts = value.trim().splitn(3, '-');
		let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(format!("invalid date format: {}", value));
		};

		let year = year.parse::<i32>().map_err(|_| format!("invalid year: {}", year))?;
		let month = month.parse::<u32>().map_err(|_| format!("invalid month: {}", month))?;
		let day = day.parse::<u32>().map_err(|_| format!("invalid day: {}", day))?;

		Date::from_ymd(year, month, day)
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
		value.parse().map_err(E::custom)
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_str(DateVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_date_display() {
		assert_eq!(Date::new(2024, 3, 15).unwrap().to_string(), "2024-03-15");
		assert_eq!(Date::new(1970, 1, 1).unwrap().to_string(), "1970-01-01");
		assert_eq!(Date::new(2024, 2, 29).unwrap().to_string(), "2024-02-29");
		assert_eq!(Date::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
		assert_eq!(Date::default().to_string(), "1970-01-01");
	}

	#[test]
	fn test_date_roundtrip() {
		for (year, month, day) in [(1900, 1, 1), (1970, 1, 1), (2000, 2, 29), (2024, 12, 31), (2100, 6, 15)] {
			let date = Date::new(year, month, day).unwrap();
			let recovered = Date::from_days_since_epoch(date.to_days_since_epoch()).unwrap();
			assert_eq!((recovered.year(), recovered.month(), recovered.day()), (year, month, day));
		}
	}

	#[test]
	fn test_leap_year_detection() {
		assert!(Date::is_leap_year(2000));
		assert!(Date::is_leap_year(2024));
		assert!(!Date::is_leap_year(1900));
		assert!(!Date::is_leap_year(2023));
	}

	#[test]
	fn test_invalid_dates() {
		assert!(Date::new(2024, 0, 1).is_none());
		assert!(Date::new(2024, 13, 1).is_none());
		assert!(Date::new(2024, 1, 0).is_none());
		assert!(Date::new(2024, 1, 32).is_none());
		assert!(Date::new(2023, 2, 29).is_none());
		assert!(Date::new(2024, 4, 31).is_none());
	}

	#[test]
	fn test_year_out_of_range() {
		assert!(Date::new(1_000_000, 12, 31).is_some());
		let earliest = Date::new(-1_000_000, 1, 1).unwrap();
		assert_eq!(Date::from_days_since_epoch(earliest.to_days_since_epoch()), Some(earliest));
		assert!(Date::new(1_000_001, 1, 1).is_none());
		assert!(Date::new(i32::MAX, 1, 1).is_none());
		assert!(Date::new(i32::MIN, 1, 1).is_none());
		assert!("20000000-01-01".parse::<Date>().is_err());
	}

	#[test]
	fn test_weekday() {
		// 1970-01-01 was a Thursday
		assert_eq!(Date::new(1970, 1, 1).unwrap().weekday(), 3);
		// 2024-01-01 was a Monday
		assert_eq!(Date::new(2024, 1, 1).unwrap().weekday(), 0);
		assert_eq!(Date::new(2024, 1, 7).unwrap().weekday(), 6);
		// before the epoch
		assert_eq!(Date::new(1969, 12, 29).unwrap().weekday(), 0);
	}

	#[test]
	fn test_start_of_week_and_month() {
		let date = Date::new(2024, 1, 10).unwrap();
		assert_eq!(date.start_of_week(), Date::new(2024, 1, 8).unwrap());
		assert_eq!(date.start_of_month(), Date::new(2024, 1, 1).unwrap());

		let date = Date::new(2024, 3, 1).unwrap();
		assert_eq!(date.start_of_week(), Date::new(2024, 2, 26).unwrap());
		assert_eq!(date.start_of_month(), date);
	}

	#[test]
	fn test_parse() {
		assert_eq!("2017-10-02".parse::<Date>().unwrap(), Date::new(2017, 10, 2).unwrap());
		assert!("2017-10".parse::<Date>().is_err());
		assert!("2017-02-30".parse::<Date>().is_err());
	}

	#[test]
	fn test_serde_roundtrip() {
		let date = Date::new(2024, 3, 15).unwrap();
		let json = serde_json::to_string(&date).unwrap();
		assert_eq!(json, "\"2024-03-15\"");

		let recovered: Date = serde_json::from_str(&json).unwrap();
		assert_eq!(recovered, date);
	}
}
