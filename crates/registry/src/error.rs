use crate::version::VersionError;

/// Errors raised by the type registry and the decode path.
///
/// The registry never logs or swallows these; every error is returned to the
/// caller at the point of the offending call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
	/// Two registrations share a wire type name.
	#[error("duplicate type registration: {id}")]
	DuplicateType { id: String },

	/// `register` was called after the registry sealed on first lookup.
	#[error("registry is frozen; late registration of {id}")]
	RegistryFrozen { id: String },

	/// A required lookup named a type that was never registered.
	#[error("unknown type: {id}")]
	UnknownType { id: String },

	/// A strict decode saw a member that is not legal (or not visible) for the type.
	#[error("unknown member {member:?} for {id}")]
	UnknownMember { id: String, member: String },

	/// A descriptor lists the same member twice.
	#[error("duplicate member {member:?} in {id}")]
	DuplicateMember { id: String, member: String },

	/// A member gate names a string that is not a canonical member.
	#[error("version gate for {member:?} in {id}, which is not a member")]
	GateForUnknownMember { id: String, member: String },

	/// A gate version string is not dotted-numeric.
	#[error("invalid version {input:?} in {id}: {reason}")]
	InvalidVersion {
		id: String,
		input: String,
		#[source]
		reason: VersionError,
	},
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
