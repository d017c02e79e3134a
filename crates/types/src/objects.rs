//! Managed-object type hierarchy.
//!
//! Each entry names its direct base; [`vmomi_registry::TypeRegistry::is_subtype_of`]
//! walks these links, which is how a property collector result typed as
//! `ClusterComputeResource` is accepted where a `ComputeResource` is expected.

use vmomi_registry::managed_object;

managed_object! {
	/// Managed object that can carry custom field values.
	ExtensibleManagedObject;
	/// Node of the inventory tree.
	ManagedEntity: ExtensibleManagedObject;

	Alarm: ExtensibleManagedObject;
	AlarmManager;
	Task: ExtensibleManagedObject;

	Folder: ManagedEntity;
	/// Folder of datastores managed together by Storage DRS.
	StoragePod: Folder since "5.0";
	Datacenter: ManagedEntity;
	Datastore: ManagedEntity;

	ComputeResource: ManagedEntity;
	ClusterComputeResource: ComputeResource;
	HostSystem: ManagedEntity;
	ResourcePool: ManagedEntity;
	VirtualApp: ResourcePool since "4.0";
	VirtualMachine: ManagedEntity;

	Network: ManagedEntity;
	DistributedVirtualPortgroup: Network;
	/// Network managed outside vCenter, such as by NSX.
	OpaqueNetwork: Network since "5.5";
	DistributedVirtualSwitch: ManagedEntity;
	VmwareDistributedVirtualSwitch: DistributedVirtualSwitch;
}
