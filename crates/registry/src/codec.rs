//! Codec-facing decode and encode of enumeration values.
//!
//! The SOAP/XML codec owns framing and element handling; this module is the
//! narrow interface it calls for the enumeration half of a value:
//!
//! - **Inbound:** `(wire type name, raw string)` is resolved through
//!   [`TypeRegistry::lookup_required`], checked against the members visible at
//!   the negotiated version, and either accepted, rejected (strict) or carried
//!   through opaquely (permissive).
//! - **Outbound:** the value's string form is emitted unchanged. No gate check
//!   is performed unless the `registry-contracts` feature is enabled, in which
//!   case debug builds assert the member is visible.

use std::fmt;

use crate::contract::VimEnum;
use crate::error::{RegistryError, Result};
use crate::index::TypeRegistry;
use crate::version::ApiVersion;

/// What to do with a member string that is not visible for its type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
	/// Fail with [`RegistryError::UnknownMember`].
	Strict,
	/// Keep the raw string as an opaque value.
	#[default]
	Permissive,
}

/// Per-codec decode policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	pub mode: DecodeMode,
	/// Negotiated API version; `None` decodes against the latest members.
	pub negotiated: Option<ApiVersion>,
}

impl DecodeOptions {
	pub fn strict() -> Self {
		Self {
			mode: DecodeMode::Strict,
			negotiated: None,
		}
	}

	pub fn permissive() -> Self {
		Self::default()
	}

	/// Filters members by `version`.
	pub fn at(mut self, version: ApiVersion) -> Self {
		self.negotiated = Some(version);
		self
	}
}

/// A decoded enumeration value whose Rust type is not known statically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
	type_name: &'static str,
	value: Box<str>,
	known: bool,
}

impl EnumValue {
	/// Wire type name of the enumeration.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.value
	}

	/// False for opaque values produced by a permissive decode.
	#[inline]
	pub fn is_known(&self) -> bool {
		self.known
	}

	/// Converts into the typed enumeration when the type names match.
	pub fn to_typed<E: VimEnum>(&self) -> Option<E> {
		if self.type_name != E::ID {
			return None;
		}
		Some(if self.known {
			E::parse_permissive(&self.value)
		} else {
			E::unknown(self.value.clone())
		})
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.value)
	}
}

/// Anything the codec can emit as an enumeration value.
pub trait WireEnum {
	fn type_name(&self) -> &str;
	fn wire(&self) -> &str;
}

impl<E: VimEnum> WireEnum for E {
	fn type_name(&self) -> &str {
		E::ID
	}

	fn wire(&self) -> &str {
		self.as_str()
	}
}

impl WireEnum for EnumValue {
	fn type_name(&self) -> &str {
		self.type_name
	}

	fn wire(&self) -> &str {
		&self.value
	}
}

/// Enumeration decode/encode bound to a registry and a policy.
#[derive(Debug, Clone)]
pub struct WireCodec<'r> {
	registry: &'r TypeRegistry,
	options: DecodeOptions,
}

impl<'r> WireCodec<'r> {
	pub fn new(registry: &'r TypeRegistry, options: DecodeOptions) -> Self {
		Self { registry, options }
	}

	#[inline]
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	fn visible(&self, type_name: &str, raw: &str) -> bool {
		self.registry
			.is_visible(type_name, raw, self.options.negotiated.as_ref())
	}

	/// Decodes `raw` as a member of the enumeration named `type_name`.
	///
	/// An unregistered type name is [`RegistryError::UnknownType`] in either
	/// mode; the codec decides what to do with it.
	pub fn decode(&self, type_name: &str, raw: &str) -> Result<EnumValue> {
		let desc = self.registry.lookup_required(type_name)?;
		let known = self.visible(type_name, raw);

		if !known && self.options.mode == DecodeMode::Strict {
			return Err(RegistryError::UnknownMember {
				id: desc.id().to_owned(),
				member: raw.to_owned(),
			});
		}

		Ok(EnumValue {
			type_name: desc.id(),
			value: raw.into(),
			known,
		})
	}

	/// Decodes `raw` straight into the typed enumeration `E`.
	pub fn decode_as<E: VimEnum>(&self, raw: &str) -> Result<E> {
		self.registry.lookup_required(E::ID)?;

		if self.visible(E::ID, raw)
			&& let Some(value) = E::from_known(raw)
		{
			return Ok(value);
		}

		match self.options.mode {
			DecodeMode::Strict => Err(RegistryError::UnknownMember {
				id: E::ID.to_owned(),
				member: raw.to_owned(),
			}),
			DecodeMode::Permissive => Ok(E::unknown(raw.into())),
		}
	}

	/// Returns the wire string for `value`.
	pub fn encode<'v, V: WireEnum + ?Sized>(&self, value: &'v V) -> &'v str {
		#[cfg(feature = "registry-contracts")]
		debug_assert!(
			!self.registry.is_visible(value.type_name(), value.wire(), None)
				|| self
					.registry
					.is_visible(value.type_name(), value.wire(), self.options.negotiated.as_ref()),
			"{}::{} is not visible at the negotiated version",
			value.type_name(),
			value.wire(),
		);
		value.wire()
	}
}
