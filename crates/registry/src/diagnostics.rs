//! Registry introspection.

use std::fmt;

/// Counts describing a sealed registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
	/// Registered enumerations.
	pub enums: usize,
	/// Registered managed-object types.
	pub objects: usize,
	/// Enumerations gated as a whole.
	pub gated_enums: usize,
	/// Individual member gates across all enumerations.
	pub member_gates: usize,
}

impl fmt::Display for RegistryStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} enums ({} gated, {} member gates), {} objects",
			self.enums, self.gated_enums, self.member_gates, self.objects
		)
	}
}
