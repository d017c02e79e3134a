//! Static type descriptors.
//!
//! Descriptors are plain `'static` data emitted by the declaration macros (or
//! a code generator targeting them). They carry identity and legal members but
//! no behavior; the [`TypeRegistry`](crate::TypeRegistry) validates them on
//! registration and derives its version gate tables from them.

use crate::error::{RegistryError, Result};

/// Where a descriptor was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
	module: &'static str,
	summary: &'static str,
}

impl Origin {
	pub const fn new(module: &'static str, summary: &'static str) -> Self {
		Self { module, summary }
	}

	/// Declaring module path (`module_path!()` at the declaration site).
	pub fn module(&self) -> &'static str {
		self.module
	}

	/// First line of the upstream documentation; empty when undocumented.
	pub fn summary(&self) -> &'static str {
		self.summary.trim()
	}
}

/// Runtime record of one enumeration: wire name, canonical members, gates.
///
/// Members are kept in declaration order, which is the canonical order handed
/// back to callers. Member strings are exactly the wire tokens.
#[derive(Debug, Clone, Copy)]
pub struct EnumDescriptor {
	id: &'static str,
	members: &'static [&'static str],
	since: Option<&'static str>,
	member_gates: &'static [(&'static str, &'static str)],
	origin: Origin,
}

impl EnumDescriptor {
	/// Creates an ungated descriptor.
	pub const fn new(id: &'static str, members: &'static [&'static str], origin: Origin) -> Self {
		Self {
			id,
			members,
			since: None,
			member_gates: &[],
			origin,
		}
	}

	/// Sets the minimum API version at which the whole enumeration exists.
	pub const fn since(mut self, version: &'static str) -> Self {
		self.since = Some(version);
		self
	}

	/// Sets per-member gates for members introduced after the enumeration itself.
	pub const fn member_gates(mut self, gates: &'static [(&'static str, &'static str)]) -> Self {
		self.member_gates = gates;
		self
	}

	/// Wire type name.
	#[inline]
	pub fn id(&self) -> &'static str {
		self.id
	}

	/// Canonical members in declaration order.
	#[inline]
	pub fn members(&self) -> &'static [&'static str] {
		self.members
	}

	/// Owned copies of the member strings, for callers that need a plain list.
	pub fn member_strings(&self) -> Vec<String> {
		self.members.iter().map(|m| (*m).to_owned()).collect()
	}

	/// Position of `member` in the canonical order.
	pub fn declaration_order_index_of(&self, member: &str) -> Option<usize> {
		self.members.iter().position(|m| *m == member)
	}

	/// Returns true if `member` is a canonical member (case-sensitive).
	#[inline]
	pub fn contains(&self, member: &str) -> bool {
		self.declaration_order_index_of(member).is_some()
	}

	/// Raw enumeration gate, as declared.
	#[inline]
	pub fn min_version(&self) -> Option<&'static str> {
		self.since
	}

	/// Raw member gates, as declared.
	#[inline]
	pub fn gated_members(&self) -> &'static [(&'static str, &'static str)] {
		self.member_gates
	}

	/// Raw gate of a single member, as declared.
	pub fn member_gate(&self, member: &str) -> Option<&'static str> {
		self.member_gates
			.iter()
			.find(|(m, _)| *m == member)
			.map(|(_, v)| *v)
	}

	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}

	/// Checks member uniqueness and that every gated member is a member.
	pub(crate) fn check_members(&self) -> Result<()> {
		for (idx, member) in self.members.iter().enumerate() {
			if self.members[..idx].contains(member) {
				return Err(RegistryError::DuplicateMember {
					id: self.id.to_owned(),
					member: (*member).to_owned(),
				});
			}
		}

		for (idx, (member, _)) in self.member_gates.iter().enumerate() {
			if !self.contains(member) {
				return Err(RegistryError::GateForUnknownMember {
					id: self.id.to_owned(),
					member: (*member).to_owned(),
				});
			}
			if self.member_gates[..idx].iter().any(|(m, _)| m == member) {
				return Err(RegistryError::DuplicateMember {
					id: self.id.to_owned(),
					member: (*member).to_owned(),
				});
			}
		}

		Ok(())
	}
}

/// Runtime record of a managed-object type.
#[derive(Debug, Clone, Copy)]
pub struct ObjectDescriptor {
	name: &'static str,
	base: Option<&'static str>,
	since: Option<&'static str>,
	origin: Origin,
}

impl ObjectDescriptor {
	pub const fn new(name: &'static str, origin: Origin) -> Self {
		Self {
			name,
			base: None,
			since: None,
			origin,
		}
	}

	/// Sets the wire name of the type this one extends.
	pub const fn extends(mut self, base: &'static str) -> Self {
		self.base = Some(base);
		self
	}

	pub const fn since(mut self, version: &'static str) -> Self {
		self.since = Some(version);
		self
	}

	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[inline]
	pub fn base(&self) -> Option<&'static str> {
		self.base
	}

	#[inline]
	pub fn min_version(&self) -> Option<&'static str> {
		self.since
	}

	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}
}

/// Any descriptor the registry can hold.
#[derive(Debug, Clone, Copy)]
pub enum TypeDescriptor {
	Enum(&'static EnumDescriptor),
	Object(&'static ObjectDescriptor),
}

impl TypeDescriptor {
	/// Wire type name.
	pub fn id(&self) -> &'static str {
		match self {
			Self::Enum(d) => d.id(),
			Self::Object(d) => d.name(),
		}
	}

	pub fn as_enum(&self) -> Option<&'static EnumDescriptor> {
		match self {
			Self::Enum(d) => Some(*d),
			Self::Object(_) => None,
		}
	}

	pub fn as_object(&self) -> Option<&'static ObjectDescriptor> {
		match self {
			Self::Object(d) => Some(*d),
			Self::Enum(_) => None,
		}
	}

	/// Pointer identity; two handles to the same static descriptor.
	pub(crate) fn same_as(&self, other: &TypeDescriptor) -> bool {
		match (self, other) {
			(Self::Enum(a), Self::Enum(b)) => std::ptr::eq(*a, *b),
			(Self::Object(a), Self::Object(b)) => std::ptr::eq(*a, *b),
			_ => false,
		}
	}
}

impl From<&'static EnumDescriptor> for TypeDescriptor {
	fn from(d: &'static EnumDescriptor) -> Self {
		Self::Enum(d)
	}
}

impl From<&'static ObjectDescriptor> for TypeDescriptor {
	fn from(d: &'static ObjectDescriptor) -> Self {
		Self::Object(d)
	}
}
