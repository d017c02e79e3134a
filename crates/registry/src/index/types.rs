use rustc_hash::FxHashMap;

use super::gates::VersionGateTable;
use crate::descriptor::{EnumDescriptor, ObjectDescriptor, TypeDescriptor};
use crate::diagnostics::RegistryStats;
use crate::version::ApiVersion;

/// Immutable, sealed registry contents.
///
/// Produced once from the builder when the registry freezes; never mutated
/// afterwards, so concurrent readers need no synchronization.
#[derive(Debug)]
pub struct RegistryIndex {
	pub(super) by_id: FxHashMap<&'static str, TypeDescriptor>,
	pub(super) ids: Vec<&'static str>,
	pub(super) gates: VersionGateTable,
}

impl RegistryIndex {
	#[inline]
	pub fn get(&self, id: &str) -> Option<TypeDescriptor> {
		self.by_id.get(id).copied()
	}

	#[inline]
	pub fn get_enum(&self, id: &str) -> Option<&'static EnumDescriptor> {
		self.get(id)?.as_enum()
	}

	#[inline]
	pub fn get_object(&self, id: &str) -> Option<&'static ObjectDescriptor> {
		self.get(id)?.as_object()
	}

	/// All registered ids, sorted.
	#[inline]
	pub fn ids(&self) -> &[&'static str] {
		&self.ids
	}

	#[inline]
	pub fn gates(&self) -> &VersionGateTable {
		&self.gates
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Iterates enumeration descriptors in id order.
	pub fn enums(&self) -> impl Iterator<Item = &'static EnumDescriptor> + '_ {
		self.ids.iter().filter_map(|id| self.get_enum(id))
	}

	/// Visible members of `id` at `negotiated`; empty for unknown ids.
	pub fn members_visible_at(&self, id: &str, negotiated: &ApiVersion) -> Vec<&'static str> {
		match self.get_enum(id) {
			Some(desc) => self.gates.members_visible_at(desc, negotiated),
			None => Vec::new(),
		}
	}

	/// Walks the base chain of `id` looking for `ancestor`.
	///
	/// Every registered type is a subtype of itself. Enumerations have no
	/// base; unknown ids and dangling base names end the walk with `false`.
	pub fn is_subtype_of(&self, id: &str, ancestor: &str) -> bool {
		let mut current = match self.get(id) {
			Some(TypeDescriptor::Object(obj)) => obj,
			Some(TypeDescriptor::Enum(_)) => return id == ancestor,
			None => return false,
		};

		// Bounded by the number of types so a cyclic declaration cannot spin.
		for _ in 0..=self.len() {
			if current.name() == ancestor {
				return true;
			}
			match current.base().and_then(|base| self.get_object(base)) {
				Some(next) => current = next,
				None => return false,
			}
		}
		false
	}

	pub fn stats(&self) -> RegistryStats {
		let enums = self.enums().count();
		RegistryStats {
			enums,
			objects: self.len() - enums,
			gated_enums: self.gates.enum_gate_count(),
			member_gates: self.gates.member_gate_count(),
		}
	}
}
