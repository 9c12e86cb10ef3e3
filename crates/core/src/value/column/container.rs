// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Typed column storage with a per-row defined bit.
///
/// Undefined rows still occupy a slot in `data` (holding `T::default()`), so
/// row indices line up across every column of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<T> {
	data: Vec<T>,
	bitvec: Vec<bool>,
}

impl<T: Clone + Default> Container<T> {
	pub fn new(data: Vec<T>) -> Self {
		let bitvec = vec![true; data.len()];
		Self {
			data,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			bitvec: Vec::with_capacity(capacity),
		}
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<T>>) -> Self {
		let values = values.into_iter();
		let mut result = Self::with_capacity(values.size_hint().0);
		for value in values {
			match value {
				Some(value) => result.push(value),
				None => result.push_undefined(),
			}
		}
		result
	}

	pub fn undefined(len: usize) -> Self {
		Self {
			data: vec![T::default(); len],
			bitvec: vec![false; len],
		}
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.bitvec.push(false);
	}

	/// Builds a new container from the rows at `indices`, in that order.
	pub fn take(&self, indices: &[usize]) -> Self {
		Self {
			data: indices.iter().map(|&i| self.data[i].clone()).collect(),
			bitvec: indices.iter().map(|&i| self.bitvec[i]).collect(),
		}
	}
}

impl<T> Container<T> {
	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.bitvec.get(index).copied().unwrap_or(false)
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(value, &defined)| defined.then_some(value))
	}

	pub fn defined_count(&self) -> usize {
		self.bitvec.iter().filter(|&&defined| defined).count()
	}
}
