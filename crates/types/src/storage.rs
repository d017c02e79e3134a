//! Storage enumerations.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Storage protocol of a device.
	pub enum DeviceProtocol since "8.0.1.0" {
		Nvme = "NVMe",
		Scsi = "SCSI",
	}
}

vim_enum! {
	pub enum HostDiskPartitionInfoType {
		None = "none",
		Vmfs = "vmfs",
		LinuxNative = "linuxNative",
		LinuxSwap = "linuxSwap",
		Extended = "extended",
		Ntfs = "ntfs",
		VmkDiagnostic = "vmkDiagnostic",
		Vffs = "vffs",
	}
}

vim_enum! {
	/// Authentication flavour of an NFS 4.1 datastore.
	pub enum HostNasVolumeSecurityType {
		AuthSys = "AUTH_SYS",
		SecKrb5 = "SEC_KRB5",
		/// Kerberos with integrity checking.
		SecKrb5i = "SEC_KRB5I" since "6.5",
	}
}

vim_enum! {
	/// Controller type recorded in a virtual disk descriptor.
	pub enum VirtualDiskAdapterType {
		Ide = "ide",
		BusLogic = "busLogic",
		LsiLogic = "lsiLogic",
	}
}

vim_enum! {
	pub enum VirtualDiskMode {
		Persistent = "persistent",
		Nonpersistent = "nonpersistent",
		Undoable = "undoable",
		IndependentPersistent = "independent_persistent",
		IndependentNonpersistent = "independent_nonpersistent",
		Append = "append",
	}
}

vim_enum! {
	/// On-disk provisioning format of a virtual disk.
	pub enum VirtualDiskType {
		Preallocated = "preallocated",
		Thin = "thin",
		/// Space-efficient sparse format.
		SeSparse = "seSparse",
		Rdm = "rdm",
		Rdmp = "rdmp",
		Raw = "raw",
		Delta = "delta",
		Sparse2Gb = "sparse2Gb",
		Thick2Gb = "thick2Gb",
		EagerZeroedThick = "eagerZeroedThick",
		SparseMonolithic = "sparseMonolithic",
		FlatMonolithic = "flatMonolithic",
		Thick = "thick",
	}
}
