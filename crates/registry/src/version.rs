//! Dotted-numeric API versions.
//!
//! Versions look like `"7.0.3.0"` or `"8.0.1.0"`: one to five unsigned integer
//! components joined by `.`. Ordering is component-wise numeric, major first.
//!
//! Versions of different lengths are padded with zeros on the minor side
//! before comparing: the major component stays aligned, and the missing
//! trailing components count as zero. So `"8.0"`, `"8.0.0"` and `"8.0.0.0"`
//! are all equal, compare equal as gates, and hash alike. Padding on the major
//! side would turn `"8.0"` into `0.0.8.0`, below every real gate, so it is
//! never done. `Display` still renders the components exactly as written.
//!
//! An absent gate (`Option::<ApiVersion>::None`) means "present since the
//! beginning". `Option`'s derived ordering already places `None` below every
//! `Some`, which is exactly the comparison the gate tables rely on.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use smallvec::SmallVec;

/// Maximum number of dot-separated components.
pub const MAX_COMPONENTS: usize = 5;

/// Why a version string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
	#[error("version string is empty")]
	Empty,
	#[error("version has {0} components, at most {MAX_COMPONENTS} are allowed")]
	TooManyComponents(usize),
	#[error("component {0:?} is not an unsigned integer")]
	InvalidComponent(String),
}

/// A parsed API version such as `8.0.1.0`.
#[derive(Clone)]
pub struct ApiVersion {
	parts: SmallVec<[u32; MAX_COMPONENTS]>,
}

impl ApiVersion {
	/// Parses a dotted-numeric version string.
	///
	/// No whitespace, signs, suffixes or wildcards are accepted.
	pub fn parse(input: &str) -> Result<Self, VersionError> {
		if input.is_empty() {
			return Err(VersionError::Empty);
		}

		let mut parts = SmallVec::new();
		for (idx, raw) in input.split('.').enumerate() {
			if idx == MAX_COMPONENTS {
				return Err(VersionError::TooManyComponents(input.split('.').count()));
			}
			if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
				return Err(VersionError::InvalidComponent(raw.to_owned()));
			}
			let value = raw
				.parse::<u32>()
				.map_err(|_| VersionError::InvalidComponent(raw.to_owned()))?;
			parts.push(value);
		}

		Ok(Self { parts })
	}

	/// Builds a version from numeric components.
	///
	/// Returns `None` for an empty slice or more than [`MAX_COMPONENTS`] parts.
	pub fn from_parts(parts: &[u32]) -> Option<Self> {
		if parts.is_empty() || parts.len() > MAX_COMPONENTS {
			return None;
		}
		Some(Self {
			parts: SmallVec::from_slice(parts),
		})
	}

	/// Components exactly as written.
	pub fn parts(&self) -> &[u32] {
		&self.parts
	}

	/// Component `idx`, reading missing trailing components as zero.
	#[inline]
	fn component(&self, idx: usize) -> u32 {
		self.parts.get(idx).copied().unwrap_or(0)
	}

	/// Components with trailing zeros removed; the identity used for hashing.
	fn significant(&self) -> &[u32] {
		let len = self
			.parts
			.iter()
			.rposition(|&p| p != 0)
			.map_or(0, |last| last + 1);
		&self.parts[..len]
	}
}

impl Ord for ApiVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		let width = self.parts.len().max(other.parts.len());
		(0..width)
			.map(|idx| self.component(idx).cmp(&other.component(idx)))
			.find(|ord| ord.is_ne())
			.unwrap_or(Ordering::Equal)
	}
}

impl PartialOrd for ApiVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for ApiVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for ApiVersion {}

impl Hash for ApiVersion {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.significant().hash(state);
	}
}

impl fmt::Display for ApiVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for part in &self.parts {
			if !first {
				f.write_str(".")?;
			}
			write!(f, "{part}")?;
			first = false;
		}
		Ok(())
	}
}

impl fmt::Debug for ApiVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ApiVersion({self})")
	}
}

impl FromStr for ApiVersion {
	type Err = VersionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl serde::Serialize for ApiVersion {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> serde::Deserialize<'de> for ApiVersion {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}
