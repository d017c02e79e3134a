//! Declaration macros feeding the process-wide registry.

use crate::bootstrap::bootstrap_or_abort;
use crate::{
	EnumDescriptor, Origin, RegistryError, TypeDescriptor, TypeRegistry, VimEnum, bootstrap_into,
	registry,
};

crate::vim_enum! {
	/// Storage protocol of a device, declared with an enumeration gate.
	pub enum BootstrapDeviceProtocol since "8.0.1.0" {
		Nvme = "NVMe",
		Scsi = "SCSI",
	}
}

crate::managed_object! {
	/// Root of the inventory tree.
	BootstrapManagedEntity;
	BootstrapComputeResource: BootstrapManagedEntity;
	BootstrapCluster: BootstrapComputeResource since "2.5";
}

#[test]
fn declarations_reach_the_global_registry() {
	let desc = registry().lookup("BootstrapDeviceProtocol").unwrap();
	assert!(std::ptr::eq(desc, BootstrapDeviceProtocol::descriptor()));
	assert_eq!(desc.members(), &["NVMe", "SCSI"]);
	assert_eq!(
		registry()
			.min_version_of_enum("BootstrapDeviceProtocol")
			.map(ToString::to_string),
		Some("8.0.1.0".to_owned())
	);

	for id in ["ContractPowerState", "CodecPowerState", "CodecFdmState"] {
		assert!(registry().lookup(id).is_some(), "{id} missing");
	}
}

#[test]
fn managed_objects_register_with_bases() {
	let cluster = registry().lookup_object("BootstrapCluster").unwrap();
	assert_eq!(cluster.base(), Some("BootstrapComputeResource"));
	assert_eq!(cluster.min_version(), Some("2.5"));
	assert!(registry().is_subtype_of("BootstrapCluster", "BootstrapManagedEntity"));

	let root = registry().lookup_type("BootstrapManagedEntity").unwrap();
	assert!(matches!(root, TypeDescriptor::Object(_)));
	assert_eq!(
		root.as_object().unwrap().origin().summary(),
		"Root of the inventory tree."
	);
}

#[test]
fn global_registry_rejects_late_registration() {
	assert!(registry().lookup("BootstrapDeviceProtocol").is_some());
	assert!(registry().is_frozen());
	assert!(bootstrap_into(registry()).is_err());
	assert!(registry().register(BootstrapDeviceProtocol::descriptor()).is_err());
}

#[test]
fn bootstrap_is_idempotent() {
	let local = TypeRegistry::new("local");
	let first = bootstrap_into(&local).unwrap();
	assert!(first >= 4);
	assert_eq!(bootstrap_into(&local).unwrap(), 0);
	assert_eq!(local.len(), first);
	assert_eq!(local.ids(), registry().ids());
}

static IMPOSTOR: EnumDescriptor = EnumDescriptor::new(
	"BootstrapDeviceProtocol",
	&["NVMe"],
	Origin::new(module_path!(), ""),
);

#[test]
fn conflicting_declaration_fails_bootstrap() {
	let local = TypeRegistry::new("conflict");
	local.register(&IMPOSTOR).unwrap();

	let err = bootstrap_into(&local).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateType {
			id: "BootstrapDeviceProtocol".into(),
		}
	);
	assert!(err.to_string().contains("BootstrapDeviceProtocol"));
}

#[test]
#[should_panic(expected = "BootstrapDeviceProtocol")]
fn conflicting_declaration_aborts_startup() {
	let local = TypeRegistry::new("conflict");
	local.register(&IMPOSTOR).unwrap();
	bootstrap_or_abort(&local);
}

#[test]
fn clean_bootstrap_does_not_abort() {
	let local = TypeRegistry::new("clean");
	bootstrap_or_abort(&local);
	assert!(local.lookup("BootstrapDeviceProtocol").is_some());
}
