//! Type registry and API-version gating for vSphere managed-object enumerations.
//!
//! Each generated enumeration is a distinct Rust type whose identity is its
//! wire string. Declarations register a static descriptor at startup; the
//! process-wide [`TypeRegistry`] maps wire type names to those descriptors and
//! records the minimum API version at which an enumeration, or an individual
//! member, became valid. A SOAP/XML codec uses this to decode
//! `<value xsi:type="FooEnum">bar</value>` into a typed value and to reject or
//! carry through members the negotiated peer version does not know.
//!
//! # Lifecycle
//!
//! The registry is open while declarations register and freezes on the first
//! read. Registering after that fails with [`RegistryError::RegistryFrozen`].
//!
//! # Modules
//!
//! - [`version`] - Dotted-numeric API versions
//! - [`descriptor`] - Static enumeration and managed-object descriptors
//! - [`contract`] - The [`VimEnum`] contract implemented by [`vim_enum!`]
//! - [`index`] - [`TypeRegistry`] and the version gate tables
//! - [`bootstrap`] - Inventory-driven startup population and [`registry()`]
//! - [`codec`] - Strict/permissive decode and encode for the external codec

pub mod bootstrap;
pub mod codec;
pub mod contract;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod index;
mod macros;
pub mod version;

pub use bootstrap::{TypeReg, bootstrap_into, registry};
pub use codec::{DecodeMode, DecodeOptions, EnumValue, WireCodec, WireEnum};
pub use contract::VimEnum;
pub use descriptor::{EnumDescriptor, ObjectDescriptor, Origin, TypeDescriptor};
pub use diagnostics::RegistryStats;
pub use error::{RegistryError, Result};
pub use index::{RegistryIndex, TypeRegistry, VersionGateTable};
pub use version::{ApiVersion, VersionError};

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste::paste, serde};
}

#[cfg(test)]
mod tests;
