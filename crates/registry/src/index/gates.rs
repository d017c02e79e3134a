//! Minimum-API-version tables.
//!
//! Two parallel maps: enumeration id to the version at which the whole
//! enumeration exists, and enumeration id to per-member versions for members
//! added later. Entries are derived from registered descriptors only, so a
//! gate can never exist for an unregistered id.

use rustc_hash::FxHashMap;

use crate::descriptor::EnumDescriptor;
use crate::error::{RegistryError, Result};
use crate::version::ApiVersion;

/// Gates parsed out of one descriptor, ready to merge.
#[derive(Debug)]
pub(crate) struct ParsedGates {
	id: &'static str,
	since: Option<ApiVersion>,
	members: Vec<(&'static str, ApiVersion)>,
}

impl ParsedGates {
	/// Parses every version string on `desc`; fails without side effects.
	pub(crate) fn parse(desc: &'static EnumDescriptor) -> Result<Self> {
		let parse = |input: &'static str| {
			ApiVersion::parse(input).map_err(|reason| RegistryError::InvalidVersion {
				id: desc.id().to_owned(),
				input: input.to_owned(),
				reason,
			})
		};

		let since = desc.min_version().map(parse).transpose()?;
		let members = desc
			.gated_members()
			.iter()
			.map(|&(member, version)| parse(version).map(|v| (member, v)))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			id: desc.id(),
			since,
			members,
		})
	}
}

/// Enumeration-level and member-level version gates.
#[derive(Debug, Default)]
pub struct VersionGateTable {
	enums: FxHashMap<&'static str, ApiVersion>,
	members: FxHashMap<&'static str, FxHashMap<&'static str, ApiVersion>>,
}

impl VersionGateTable {
	pub(crate) fn merge(&mut self, gates: ParsedGates) {
		if let Some(since) = gates.since {
			self.enums.insert(gates.id, since);
		}
		if !gates.members.is_empty() {
			self.members
				.entry(gates.id)
				.or_default()
				.extend(gates.members);
		}
	}

	/// Lowest version in which the enumeration exists; `None` means always.
	pub fn min_version_of_enum(&self, id: &str) -> Option<&ApiVersion> {
		self.enums.get(id)
	}

	/// Lowest version in which `member` exists; `None` means since the enumeration itself.
	pub fn min_version_of_member(&self, id: &str, member: &str) -> Option<&ApiVersion> {
		self.members.get(id)?.get(member)
	}

	/// Whether the enumeration itself is visible at `negotiated`.
	pub fn enum_visible_at(&self, id: &str, negotiated: &ApiVersion) -> bool {
		self.min_version_of_enum(id).is_none_or(|since| since <= negotiated)
	}

	/// Whether `member` of `id` is visible at `negotiated`.
	///
	/// Does not check that `member` is canonical; callers filter descriptor
	/// members through this.
	pub fn member_visible_at(&self, id: &str, member: &str, negotiated: &ApiVersion) -> bool {
		self.enum_visible_at(id, negotiated)
			&& self
				.min_version_of_member(id, member)
				.is_none_or(|since| since <= negotiated)
	}

	/// Canonical members of `desc` visible at `negotiated`, in declaration order.
	pub fn members_visible_at(
		&self,
		desc: &EnumDescriptor,
		negotiated: &ApiVersion,
	) -> Vec<&'static str> {
		if !self.enum_visible_at(desc.id(), negotiated) {
			return Vec::new();
		}
		desc.members()
			.iter()
			.copied()
			.filter(|member| {
				self.min_version_of_member(desc.id(), member)
					.is_none_or(|since| since <= negotiated)
			})
			.collect()
	}

	/// Number of enumerations with a whole-type gate.
	pub fn enum_gate_count(&self) -> usize {
		self.enums.len()
	}

	/// Number of individual member gates across all enumerations.
	pub fn member_gate_count(&self) -> usize {
		self.members.values().map(FxHashMap::len).sum()
	}
}
