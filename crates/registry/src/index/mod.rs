#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Type registry index infrastructure.
//!
//! # Purpose
//!
//! The `index` subsystem maps wire type names to static descriptors and keeps
//! the minimum-API-version gates derived from them. It is the lookup surface
//! a SOAP/XML codec uses to turn `<value xsi:type="FooEnum">bar</value>` into a
//! typed value and to filter members by negotiated version.
//!
//! # Mental Model
//!
//! 1. **Open:** [`TypeRegistry::register`] validates each descriptor (member
//!    uniqueness, gate well-formedness) and inserts it into a [`RegistryBuilder`].
//! 2. **Freeze:** The first read of any kind moves the builder into an immutable
//!    [`RegistryIndex`]. The transition happens exactly once.
//! 3. **Consumption:** Readers perform map lookups on the sealed index without
//!    taking locks.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`TypeRegistry`] | Open/frozen container; the API the codec consumes. |
//! | [`RegistryIndex`] | Sealed descriptors plus gate tables. |
//! | [`VersionGateTable`] | Enumeration-level and member-level minimum versions. |
//! | [`RegistryBuilder`] | Validating accumulator used while open. |
//!
//! # Invariants
//!
//! - Ids are unique across enumerations and managed-object types. A second
//!   `register` under an existing id fails, even for the same descriptor.
//!   - Enforced in: [`RegistryBuilder::insert`].
//!   - Failure symptom: `DuplicateType` naming the id.
//!
//! - A gate exists only for a registered enumeration and only for its members.
//!   - Enforced in: [`RegistryBuilder::insert`] (gates come from the descriptor being inserted).
//!   - Failure symptom: `GateForUnknownMember` naming the id and member.
//!
//! - Append-only while open, read-only once frozen.
//!   - Enforced in: [`TypeRegistry::register`], [`TypeRegistry::index`].
//!   - Failure symptom: `RegistryFrozen` naming the late id.
//!
//! - Visible members keep canonical declaration order.
//!   - Enforced in: [`VersionGateTable::members_visible_at`] (filters, never sorts).

mod build;
mod gates;
mod runtime;
mod types;

pub(crate) use build::RegistryBuilder;
pub use gates::VersionGateTable;
pub use runtime::TypeRegistry;
pub use types::RegistryIndex;
