//! Virtual machine enumerations.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Connection between the server and a VM's configuration files.
	pub enum VirtualMachineConnectionState {
		Connected = "connected",
		Disconnected = "disconnected",
		/// The VM's files are gone but it is still in the inventory.
		Orphaned = "orphaned",
		Inaccessible = "inaccessible",
		Invalid = "invalid",
	}
}

vim_enum! {
	pub enum VirtualMachineFaultToleranceState {
		NotConfigured = "notConfigured",
		Disabled = "disabled",
		Enabled = "enabled",
		NeedSecondary = "needSecondary",
		Starting = "starting",
		Running = "running",
	}
}

vim_enum! {
	/// vMotion priority. Deprecated, but still accepted by every server version.
	pub enum VirtualMachineMovePriority {
		LowPriority = "lowPriority",
		HighPriority = "highPriority",
		DefaultPriority = "defaultPriority",
	}
}

vim_enum! {
	/// Power state of a virtual machine.
	pub enum VirtualMachinePowerState {
		PoweredOff = "poweredOff",
		PoweredOn = "poweredOn",
		Suspended = "suspended",
	}
}

vim_enum! {
	/// Record/replay state. The feature is gone, the member strings are not.
	pub enum VirtualMachineRecordReplayState {
		Recording = "recording",
		Replaying = "replaying",
		Inactive = "inactive",
	}
}

vim_enum! {
	/// SGX launch control mode.
	pub enum VirtualMachineSgxInfoFlcModes since "7.0.0.0" {
		Locked = "locked",
		Unlocked = "unlocked",
	}
}

vim_enum! {
	/// VSS backup type requested when quiescing a Windows guest.
	pub enum VirtualMachineWindowsQuiesceSpecVssBackupType {
		VssBtFull = "VSS_BT_FULL",
		VssBtIncremental = "VSS_BT_INCREMENTAL",
		VssBtDifferential = "VSS_BT_DIFFERENTIAL",
		VssBtLog = "VSS_BT_LOG",
	}
}
