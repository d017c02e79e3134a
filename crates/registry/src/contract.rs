//! The uniform contract every declared enumeration exposes.

use crate::descriptor::EnumDescriptor;
use crate::error::{RegistryError, Result};

/// A string-valued, open-world enumeration.
///
/// Implemented by [`vim_enum!`](crate::vim_enum); not meant to be implemented
/// by hand. The string form is the identity: two values are equal exactly when
/// their wire strings are equal, and there is no numeric ordinal.
pub trait VimEnum: Sized + Clone + 'static {
	/// Wire type name.
	const ID: &'static str;

	/// Canonical members in declaration order.
	const MEMBERS: &'static [&'static str];

	/// The static descriptor registered for this type.
	fn descriptor() -> &'static EnumDescriptor;

	/// Wire string of this value.
	fn as_str(&self) -> &str;

	/// The canonical value for `raw`, if `raw` is a member.
	fn from_known(raw: &str) -> Option<Self>;

	/// Wraps `raw` as an opaque value without checking membership.
	fn unknown(raw: Box<str>) -> Self;

	/// All canonical values, in declaration order.
	fn members() -> Vec<Self> {
		Self::MEMBERS
			.iter()
			.filter_map(|m| Self::from_known(m))
			.collect()
	}

	/// Wire strings of all canonical values, in declaration order.
	fn member_strings() -> Vec<&'static str> {
		Self::MEMBERS.to_vec()
	}

	/// Returns true if this value is a canonical member.
	fn is_known(&self) -> bool {
		Self::MEMBERS.contains(&self.as_str())
	}

	/// Strict construction: unknown strings fail with [`RegistryError::UnknownMember`].
	fn parse_strict(raw: &str) -> Result<Self> {
		Self::from_known(raw).ok_or_else(|| RegistryError::UnknownMember {
			id: Self::ID.to_owned(),
			member: raw.to_owned(),
		})
	}

	/// Permissive construction: unknown strings are retained verbatim.
	fn parse_permissive(raw: &str) -> Self {
		Self::from_known(raw).unwrap_or_else(|| Self::unknown(raw.into()))
	}
}

#[cfg(test)]
mod tests;
