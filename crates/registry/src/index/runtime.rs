//! Process-lifetime registry container with a one-way freeze.
//!
//! # Role
//!
//! [`TypeRegistry`] is open while bootstrap registers descriptors and seals
//! itself on the first read. Sealing moves the builder contents into a
//! [`RegistryIndex`] published through a `OnceLock`; every later read is a
//! plain lock-free map lookup on immutable data.
//!
//! # Invariants
//!
//! - Registration after the first read fails with `RegistryFrozen`.
//! - Readers always observe a fully populated index: the index is built from
//!   the builder under its lock, and no registration can land once the
//!   `OnceLock` holds a value.

use std::sync::OnceLock;

use parking_lot::Mutex;

use super::build::RegistryBuilder;
use super::types::RegistryIndex;
use crate::descriptor::{EnumDescriptor, ObjectDescriptor, TypeDescriptor};
use crate::diagnostics::RegistryStats;
use crate::error::{RegistryError, Result};
use crate::version::ApiVersion;

/// Wire type name to descriptor mapping with version gates.
///
/// Use [`crate::registry()`] for the process-wide instance. Standalone
/// instances exist for code generators and tests that need an isolated map.
pub struct TypeRegistry {
	label: &'static str,
	open: Mutex<Option<RegistryBuilder>>,
	sealed: OnceLock<RegistryIndex>,
}

impl TypeRegistry {
	/// Creates an empty, open registry.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			open: Mutex::new(Some(RegistryBuilder::default())),
			sealed: OnceLock::new(),
		}
	}

	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Registers a descriptor under its own wire name.
	///
	/// A second registration under an existing id fails with
	/// [`RegistryError::DuplicateType`], whether or not it is the same
	/// descriptor. Any call after the first read fails with
	/// [`RegistryError::RegistryFrozen`].
	pub fn register(&self, desc: impl Into<TypeDescriptor>) -> Result<()> {
		let desc = desc.into();
		self.with_builder(desc, |builder| builder.insert(desc))?;
		tracing::trace!(registry = self.label, id = desc.id(), "registered type");
		Ok(())
	}

	/// Registers `desc` unless this exact static descriptor is already present.
	///
	/// Returns whether it was inserted. A different descriptor under the same
	/// id still fails with [`RegistryError::DuplicateType`].
	pub(crate) fn register_missing(&self, desc: TypeDescriptor) -> Result<bool> {
		let inserted = self.with_builder(desc, |builder| {
			if builder.holds(&desc) {
				return Ok(false);
			}
			builder.insert(desc).map(|()| true)
		})?;
		if inserted {
			tracing::trace!(registry = self.label, id = desc.id(), "registered type");
		}
		Ok(inserted)
	}

	fn with_builder<T>(
		&self,
		desc: TypeDescriptor,
		f: impl FnOnce(&mut RegistryBuilder) -> Result<T>,
	) -> Result<T> {
		let frozen = || RegistryError::RegistryFrozen {
			id: desc.id().to_owned(),
		};

		if self.is_frozen() {
			return Err(frozen());
		}

		let mut open = self.open.lock();
		let builder = open.as_mut().ok_or_else(frozen)?;
		f(builder)
	}

	/// Returns true once the first read has sealed the registry.
	#[inline]
	pub fn is_frozen(&self) -> bool {
		self.sealed.get().is_some()
	}

	/// Number of descriptors registered so far. Does not freeze.
	pub fn len(&self) -> usize {
		match self.sealed.get() {
			Some(index) => index.len(),
			None => self.open.lock().as_ref().map_or(0, RegistryBuilder::len),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Seals the registry (if still open) and returns the sealed index.
	///
	/// Every read path goes through here, which is what makes the first
	/// lookup the freeze transition.
	pub fn index(&self) -> &RegistryIndex {
		self.sealed.get_or_init(|| {
			let builder = self.open.lock().take().unwrap_or_default();
			let index = builder.build();
			let stats = index.stats();
			tracing::debug!(
				registry = self.label,
				enums = stats.enums,
				objects = stats.objects,
				gated_enums = stats.gated_enums,
				member_gates = stats.member_gates,
				"type registry sealed"
			);
			index
		})
	}

	/// Explicitly ends bootstrap. Equivalent to any first lookup.
	pub fn freeze(&self) {
		self.index();
	}

	/// Looks up an enumeration descriptor by wire name.
	#[inline]
	pub fn lookup(&self, id: &str) -> Option<&'static EnumDescriptor> {
		self.index().get_enum(id)
	}

	/// Like [`lookup`](Self::lookup), but an unregistered id (or one naming a
	/// non-enumeration type) is an [`RegistryError::UnknownType`].
	pub fn lookup_required(&self, id: &str) -> Result<&'static EnumDescriptor> {
		self.lookup(id)
			.ok_or_else(|| RegistryError::UnknownType { id: id.to_owned() })
	}

	/// Looks up any registered type, enumeration or managed object.
	#[inline]
	pub fn lookup_type(&self, id: &str) -> Option<TypeDescriptor> {
		self.index().get(id)
	}

	#[inline]
	pub fn lookup_object(&self, id: &str) -> Option<&'static ObjectDescriptor> {
		self.index().get_object(id)
	}

	pub fn min_version_of_enum(&self, id: &str) -> Option<&ApiVersion> {
		self.index().gates().min_version_of_enum(id)
	}

	pub fn min_version_of_member(&self, id: &str, member: &str) -> Option<&ApiVersion> {
		self.index().gates().min_version_of_member(id, member)
	}

	/// Canonical members of `id` visible at `negotiated`, in declaration order.
	///
	/// Empty when the enumeration itself is gated above `negotiated` or when
	/// `id` is not a registered enumeration.
	pub fn members_visible_at(&self, id: &str, negotiated: &ApiVersion) -> Vec<&'static str> {
		self.index().members_visible_at(id, negotiated)
	}

	/// Whether `member` is a legal value of `id` at `negotiated`.
	///
	/// `None` means the latest version: every canonical member is visible.
	pub fn is_visible(&self, id: &str, member: &str, negotiated: Option<&ApiVersion>) -> bool {
		let index = self.index();
		let Some(desc) = index.get_enum(id) else {
			return false;
		};
		if !desc.contains(member) {
			return false;
		}
		negotiated.is_none_or(|v| index.gates().member_visible_at(id, member, v))
	}

	pub fn is_subtype_of(&self, id: &str, ancestor: &str) -> bool {
		self.index().is_subtype_of(id, ancestor)
	}

	/// All registered ids, sorted.
	pub fn ids(&self) -> &[&'static str] {
		self.index().ids()
	}

	pub fn stats(&self) -> RegistryStats {
		self.index().stats()
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("label", &self.label)
			.field("frozen", &self.is_frozen())
			.field("len", &self.len())
			.finish()
	}
}
