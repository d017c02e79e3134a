//! vSphere enumeration and managed-object type catalogue.
//!
//! Every declaration here goes through [`vmomi_registry::vim_enum!`] or
//! [`vmomi_registry::managed_object!`], so linking this crate is enough to
//! populate [`vmomi_registry::registry()`]. Declarations are grouped by the
//! part of the inventory they describe:
//!
//! - [`cluster`] - HA/DRS and vCLS state
//! - [`host`] - Host connectivity, power, certificates and NVMe transports
//! - [`vm`] - Virtual machine state, placement and quiescing
//! - [`storage`] - Disks, datastores and device protocols
//! - [`network`] - Distributed switch teaming and port groups
//! - [`task`] - Task and health status reported by every managed entity
//! - [`objects`] - Managed-object type hierarchy
//!
//! Member strings are the exact tokens the server sends, including
//! deprecated ones, and appear in the order the schema lists them.

use vmomi_registry::{EnumDescriptor, VimEnum};

pub mod cluster;
pub mod host;
pub mod network;
pub mod objects;
pub mod storage;
pub mod task;
pub mod vm;

pub use vmomi_registry::{ApiVersion, DecodeOptions, WireCodec, registry};

/// Descriptors of every enumeration this crate declares, grouped as above.
///
/// The process registry holds these enumerations plus anything else linked
/// into the binary.
pub fn catalog() -> Vec<&'static EnumDescriptor> {
	vec![
		cluster::ActionType::descriptor(),
		cluster::ClusterComputeResourceVcsHealthStatus::descriptor(),
		cluster::ClusterDasAamNodeStateDasState::descriptor(),
		cluster::ClusterDasFdmAvailabilityState::descriptor(),
		cluster::ClusterDasVmSettingsIsolationResponse::descriptor(),
		cluster::ClusterDasVmSettingsRestartPriority::descriptor(),
		cluster::DasVmPriority::descriptor(),
		host::HostCertificateManagerCertificateInfoCertificateStatus::descriptor(),
		host::HostDasErrorEventHostDasErrorReason::descriptor(),
		host::HostNvmeTransportType::descriptor(),
		host::HostStorageProtocol::descriptor(),
		host::HostSystemConnectionState::descriptor(),
		host::HostSystemPowerState::descriptor(),
		network::DistributedVirtualPortgroupPortgroupType::descriptor(),
		network::DistributedVirtualSwitchHostMemberHostComponentState::descriptor(),
		network::DistributedVirtualSwitchNicTeamingPolicyMode::descriptor(),
		storage::DeviceProtocol::descriptor(),
		storage::HostDiskPartitionInfoType::descriptor(),
		storage::HostNasVolumeSecurityType::descriptor(),
		storage::VirtualDiskAdapterType::descriptor(),
		storage::VirtualDiskMode::descriptor(),
		storage::VirtualDiskType::descriptor(),
		task::ManagedEntityStatus::descriptor(),
		task::TaskInfoState::descriptor(),
		vm::VirtualMachineConnectionState::descriptor(),
		vm::VirtualMachineFaultToleranceState::descriptor(),
		vm::VirtualMachineMovePriority::descriptor(),
		vm::VirtualMachinePowerState::descriptor(),
		vm::VirtualMachineRecordReplayState::descriptor(),
		vm::VirtualMachineSgxInfoFlcModes::descriptor(),
		vm::VirtualMachineWindowsQuiesceSpecVssBackupType::descriptor(),
	]
}
