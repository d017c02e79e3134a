//! Host system enumerations.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Validity of a host's SSL certificate as tracked by the certificate manager.
	pub enum HostCertificateManagerCertificateInfoCertificateStatus {
		Unknown = "unknown",
		Expired = "expired",
		Expiring = "expiring",
		ExpiringShortly = "expiringShortly",
		ExpirationImminent = "expirationImminent",
		Good = "good",
	}
}

vim_enum! {
	/// Reason attached to a host HA error event.
	pub enum HostDasErrorEventHostDasErrorReason {
		ConfigFailed = "configFailed",
		Timeout = "timeout",
		CommunicationInitFailed = "communicationInitFailed",
		HealthCheckScriptFailed = "healthCheckScriptFailed",
		AgentFailed = "agentFailed",
		AgentShutdown = "agentShutdown",
		IsolationAddressUnpingable = "isolationAddressUnpingable",
		Other = "other",
	}
}

vim_enum! {
	/// Transport used by an NVMe-oF adapter.
	pub enum HostNvmeTransportType {
		Pcie = "pcie",
		FibreChannel = "fibreChannel",
		Rdma = "rdma",
		/// NVMe over TCP.
		Tcp = "tcp" since "7.0.3.0",
		Loopback = "loopback",
		Unsupported = "unsupported",
	}
}

vim_enum! {
	pub enum HostStorageProtocol since "7.0.0.0" {
		Scsi = "scsi",
		Nvme = "nvme",
	}
}

vim_enum! {
	/// Connection between vCenter and a host.
	pub enum HostSystemConnectionState {
		Connected = "connected",
		/// The host stopped sending heartbeats.
		NotResponding = "notResponding",
		Disconnected = "disconnected",
	}
}

vim_enum! {
	/// Power state of a host.
	///
	/// `unknown` is a real member: the server reports it when the host is
	/// disconnected.
	pub enum HostSystemPowerState {
		PoweredOn = "poweredOn",
		PoweredOff = "poweredOff",
		StandBy = "standBy",
		Unknown = "unknown",
	}
}
