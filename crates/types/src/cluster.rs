//! Cluster HA/DRS enumerations.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Recommendation action kinds produced by DRS and DPM.
	pub enum ActionType {
		MigrationV1 = "MigrationV1",
		VmPowerV1 = "VmPowerV1",
		HostPowerV1 = "HostPowerV1",
		HostMaintenanceV1 = "HostMaintenanceV1",
		StorageMigrationV1 = "StorageMigrationV1",
		StoragePlacementV1 = "StoragePlacementV1",
		PlacementV1 = "PlacementV1",
		HostInfraUpdateHaV1 = "HostInfraUpdateHaV1",
	}
}

vim_enum! {
	/// Health of the vSphere Cluster Services agent VMs.
	pub enum ClusterComputeResourceVcsHealthStatus since "7.0.1.1" {
		Healthy = "healthy",
		Degraded = "degraded",
		Nonhealthy = "nonhealthy",
	}
}

vim_enum! {
	/// Legacy AAM agent state on a cluster node.
	pub enum ClusterDasAamNodeStateDasState {
		Uninitialized = "uninitialized",
		Initialized = "initialized",
		Configuring = "configuring",
		Unconfiguring = "unconfiguring",
		Running = "running",
		Error = "error",
		AgentShutdown = "agentShutdown",
		NodeFailed = "nodeFailed",
	}
}

vim_enum! {
	/// State of the FDM (HA) agent on a host.
	///
	/// `retry` only exists from 8.0.
	pub enum ClusterDasFdmAvailabilityState {
		Uninitialized = "uninitialized",
		/// An election for the primary agent is in progress.
		Election = "election",
		/// This host runs the primary agent.
		Master = "master",
		ConnectedToMaster = "connectedToMaster",
		NetworkPartitionedFromMaster = "networkPartitionedFromMaster",
		NetworkIsolated = "networkIsolated",
		HostDown = "hostDown",
		InitializationError = "initializationError",
		UninitializationError = "uninitializationError",
		FdmUnreachable = "fdmUnreachable",
		Retry = "retry" since "8.0.0.0",
	}
}

vim_enum! {
	/// What HA does with a VM when its host becomes isolated.
	pub enum ClusterDasVmSettingsIsolationResponse {
		None = "none",
		PowerOff = "powerOff",
		Shutdown = "shutdown",
		/// Defer to the cluster default.
		ClusterIsolationResponse = "clusterIsolationResponse",
	}
}

vim_enum! {
	/// Order in which HA restarts VMs after a failure.
	pub enum ClusterDasVmSettingsRestartPriority {
		Disabled = "disabled",
		Lowest = "lowest",
		Low = "low",
		Medium = "medium",
		High = "high",
		Highest = "highest",
		ClusterRestartPriority = "clusterRestartPriority",
	}
}

vim_enum! {
	/// Per-VM HA priority from the pre-5.0 API. Still sent by older servers.
	pub enum DasVmPriority {
		Disabled = "disabled",
		Low = "low",
		Medium = "medium",
		High = "high",
	}
}
