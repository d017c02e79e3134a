//! Startup population of the process-wide registry.
//!
//! Each declaration (see [`vim_enum!`](crate::vim_enum) and
//! [`managed_object!`](crate::managed_object)) submits a [`TypeReg`] via
//! `inventory::submit!`. Submissions are independent of one another and of
//! link order; the first call to [`registry()`] collects all of them into a
//! fresh [`TypeRegistry`]. The end state depends only on the set of
//! submissions, never on the order they are visited in.

use std::sync::LazyLock;

use crate::descriptor::TypeDescriptor;
use crate::error::Result;
use crate::index::TypeRegistry;

/// Wrapper for `inventory::collect!`.
pub struct TypeReg(pub TypeDescriptor);

inventory::collect!(TypeReg);

/// Registers every submitted descriptor into `registry`.
///
/// Safe to call repeatedly: a submission whose own descriptor is already
/// present is skipped. Any other descriptor under a submitted id is a
/// [`RegistryError::DuplicateType`](crate::RegistryError::DuplicateType).
/// Returns the number of descriptors newly inserted.
pub fn bootstrap_into(registry: &TypeRegistry) -> Result<usize> {
	let mut inserted = 0;
	for reg in inventory::iter::<TypeReg> {
		if registry.register_missing(reg.0)? {
			inserted += 1;
		}
	}
	Ok(inserted)
}

/// Runs [`bootstrap_into`] and aborts startup on failure.
///
/// # Panics
///
/// Panics with the error, which names the offending id.
pub(crate) fn bootstrap_or_abort(registry: &TypeRegistry) {
	if let Err(e) = bootstrap_into(registry) {
		panic!("type registry bootstrap failed: {e}");
	}
}

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
	let registry = TypeRegistry::new("vmomi");
	bootstrap_or_abort(&registry);
	registry
});

/// The process-wide registry, populated from all declarations on first access.
///
/// The registry stays open for additional [`TypeRegistry::register`] calls
/// until its first lookup.
pub fn registry() -> &'static TypeRegistry {
	&REGISTRY
}
