use rustc_hash::FxHashMap;

use super::gates::{ParsedGates, VersionGateTable};
use super::types::RegistryIndex;
use crate::descriptor::TypeDescriptor;
use crate::error::{RegistryError, Result};
use crate::version::ApiVersion;

/// Accumulates descriptors while the registry is open.
///
/// Every insertion is validated in full before anything is stored, so a
/// failed registration leaves the builder untouched.
#[derive(Debug, Default)]
pub(crate) struct RegistryBuilder {
	by_id: FxHashMap<&'static str, TypeDescriptor>,
	gates: VersionGateTable,
}

impl RegistryBuilder {
	/// Inserts `desc`; any existing entry under its id is a `DuplicateType`.
	pub(crate) fn insert(&mut self, desc: TypeDescriptor) -> Result<()> {
		let id = desc.id();

		if self.by_id.contains_key(id) {
			return Err(RegistryError::DuplicateType { id: id.to_owned() });
		}

		let gates = match desc {
			TypeDescriptor::Enum(e) => {
				e.check_members()?;
				Some(ParsedGates::parse(e)?)
			}
			TypeDescriptor::Object(o) => {
				if let Some(since) = o.min_version() {
					ApiVersion::parse(since).map_err(|reason| {
						RegistryError::InvalidVersion {
							id: id.to_owned(),
							input: since.to_owned(),
							reason,
						}
					})?;
				}
				None
			}
		};

		if let Some(gates) = gates {
			self.gates.merge(gates);
		}
		self.by_id.insert(id, desc);
		Ok(())
	}

	/// Whether this exact static descriptor is already stored.
	pub(crate) fn holds(&self, desc: &TypeDescriptor) -> bool {
		self.by_id
			.get(desc.id())
			.is_some_and(|existing| existing.same_as(desc))
	}

	pub(crate) fn len(&self) -> usize {
		self.by_id.len()
	}

	pub(crate) fn build(self) -> RegistryIndex {
		let mut ids: Vec<&'static str> = self.by_id.keys().copied().collect();
		ids.sort_unstable();

		RegistryIndex {
			by_id: self.by_id,
			ids,
			gates: self.gates,
		}
	}
}
