//! Whole-catalogue checks against the process registry.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vmomi_registry::{
	ApiVersion, DecodeOptions, EnumDescriptor, Origin, RegistryError, TypeRegistry, VimEnum,
	WireCodec, registry,
};
use vmomi_types::cluster::ClusterDasFdmAvailabilityState;
use vmomi_types::host::HostSystemPowerState;
use vmomi_types::storage::DeviceProtocol;
use vmomi_types::{catalog, vm};

const PROBES: &[&str] = &[
	"2.5", "4.0", "5.0", "5.5", "6.5", "6.7.3", "7.0.0.0", "7.0.1.0", "7.0.1.1", "7.0.3.0",
	"8.0.0.0", "8.0.0.1", "8.0.1.0", "8.0.3.0", "9.0.0.0",
];

fn v(s: &str) -> ApiVersion {
	ApiVersion::parse(s).unwrap()
}

fn enums() -> Vec<&'static EnumDescriptor> {
	registry().index().enums().collect()
}

/// Visibility of every member at `w`, computed from the descriptor alone.
fn expected_visible(desc: &EnumDescriptor, w: &ApiVersion) -> Vec<&'static str> {
	if desc.min_version().is_some_and(|gate| v(gate) > *w) {
		return Vec::new();
	}
	desc.members()
		.iter()
		.copied()
		.filter(|m| desc.member_gate(m).is_none_or(|gate| v(gate) <= *w))
		.collect()
}

#[test]
fn registry_holds_the_whole_catalog() {
	let registered: HashSet<_> = enums().into_iter().map(EnumDescriptor::id).collect();
	for desc in catalog() {
		assert!(registered.contains(desc.id()), "{} not registered", desc.id());
		assert!(std::ptr::eq(registry().lookup(desc.id()).unwrap(), desc));
	}
	assert_eq!(registered.len(), catalog().len());
}

#[test]
fn every_member_round_trips_under_strict_latest() {
	let codec = WireCodec::new(registry(), DecodeOptions::strict());
	for desc in enums() {
		for member in desc.members() {
			let value = codec.decode(desc.id(), member).unwrap();
			assert!(value.is_known());
			assert_eq!(codec.encode(&value), *member);
		}
	}
}

#[test]
fn member_order_is_stable_and_unique() {
	for desc in enums() {
		assert_eq!(desc.member_strings(), desc.member_strings());
		let unique: HashSet<_> = desc.members().iter().collect();
		assert_eq!(unique.len(), desc.members().len(), "{} repeats a member", desc.id());
		for (i, member) in desc.members().iter().enumerate() {
			assert_eq!(desc.declaration_order_index_of(member), Some(i));
		}
	}
}

#[test]
fn lookup_matches_typed_members() {
	fn check<E: VimEnum>() {
		let found = registry().lookup(E::ID).unwrap();
		let typed: Vec<String> = E::members().iter().map(|m| m.as_str().to_owned()).collect();
		assert_eq!(found.member_strings(), typed);
	}

	check::<HostSystemPowerState>();
	check::<ClusterDasFdmAvailabilityState>();
	check::<DeviceProtocol>();
	check::<vm::VirtualMachinePowerState>();
	check::<vm::VirtualMachineWindowsQuiesceSpecVssBackupType>();
}

#[test]
fn visibility_follows_gates_at_every_probe() {
	for desc in enums() {
		for probe in PROBES {
			let w = v(probe);
			assert_eq!(
				registry().members_visible_at(desc.id(), &w),
				expected_visible(desc, &w),
				"{} at {probe}",
				desc.id()
			);
		}
	}
}

#[test]
fn gated_members_appear_exactly_at_their_gate() {
	for desc in enums() {
		for (member, gate) in desc.gated_members() {
			let gate = v(gate);
			assert_eq!(registry().min_version_of_member(desc.id(), member), Some(&gate));

			let enum_visible = registry()
				.min_version_of_enum(desc.id())
				.is_none_or(|e| *e <= gate);
			let at_gate = registry().members_visible_at(desc.id(), &gate);
			assert_eq!(at_gate.contains(member), enum_visible);

			let below = v("1.0");
			assert!(!registry().members_visible_at(desc.id(), &below).contains(member));
		}
	}
}

#[test]
fn host_power_state_members() {
	let desc = registry().lookup("HostSystemPowerState").unwrap();
	assert_eq!(desc.members(), &["poweredOn", "poweredOff", "standBy", "unknown"]);
	assert!(registry().is_frozen());
}

#[test]
fn fdm_retry_member_is_gated() {
	let id = "ClusterDasFdmAvailabilityState";
	let desc = registry().lookup(id).unwrap();
	assert_eq!(desc.members().len(), 11);

	let old = registry().members_visible_at(id, &v("7.0.3.0"));
	let expected: Vec<_> = desc.members().iter().copied().filter(|m| *m != "retry").collect();
	assert_eq!(old, expected);
	assert_eq!(registry().members_visible_at(id, &v("8.0.0.0")), desc.members());
}

#[test]
fn device_protocol_is_gated_as_a_whole() {
	assert_eq!(registry().members_visible_at("DeviceProtocol", &v("8.0.0.1")), Vec::<&str>::new());
	assert_eq!(
		registry().members_visible_at("DeviceProtocol", &v("8.0.1.0")),
		vec!["NVMe", "SCSI"]
	);
	assert!(!registry().is_visible("DeviceProtocol", "NVMe", Some(&v("7.0.3.0"))));
	assert!(registry().is_visible("DeviceProtocol", "NVMe", None));
}

#[test]
fn unknown_power_state_decodes_by_mode() {
	let strict = WireCodec::new(registry(), DecodeOptions::strict());
	assert!(matches!(
		strict.decode("HostSystemPowerState", "poweredSideways"),
		Err(RegistryError::UnknownMember { .. })
	));

	let permissive = WireCodec::new(registry(), DecodeOptions::permissive());
	let value: HostSystemPowerState = permissive.decode_as("poweredSideways").unwrap();
	assert!(!value.is_known());
	assert_eq!(value.to_string(), "poweredSideways");
	assert_eq!(permissive.encode(&value), "poweredSideways");
	assert_eq!(serde_json::to_string(&value).unwrap(), "\"poweredSideways\"");
}

#[test]
fn global_registry_is_frozen_after_lookup() {
	assert!(registry().lookup("HostSystemPowerState").is_some());
	assert_eq!(
		registry().register(HostSystemPowerState::descriptor()),
		Err(RegistryError::RegistryFrozen {
			id: "HostSystemPowerState".into(),
		})
	);
}

static FIRST_X: EnumDescriptor = EnumDescriptor::new("X", &["a"], Origin::new(module_path!(), ""));
static SECOND_X: EnumDescriptor = EnumDescriptor::new("X", &["b"], Origin::new(module_path!(), ""));

#[test]
fn second_descriptor_with_same_id_is_rejected() {
	let local = TypeRegistry::new("duplicate");
	local.register(&FIRST_X).unwrap();
	assert_eq!(
		local.register(&SECOND_X),
		Err(RegistryError::DuplicateType { id: "X".into() })
	);
	assert_eq!(local.lookup("X").unwrap().members(), &["a"]);
}

#[test]
fn version_ordering() {
	assert!(v("8.0.0.1") < v("8.0.1.0"));
	assert!(v("8.0.1.0") < v("8.0.3.0"));
	assert!(v("7.0.3.0") < v("8.0.0.0"));
	assert!(None < Some(v("1.0")));
}

#[test]
fn stats_cover_objects_and_enums() {
	let stats = registry().stats();
	assert_eq!(stats.enums, catalog().len());
	assert!(stats.objects >= 20);
	assert!(registry().is_subtype_of("VmwareDistributedVirtualSwitch", "ManagedEntity"));
	assert!(registry().is_subtype_of("StoragePod", "ExtensibleManagedObject"));
	assert!(!registry().is_subtype_of("AlarmManager", "ManagedEntity"));
}

proptest! {
	#[test]
	fn visibility_agrees_with_gates(parts in prop::collection::vec(0u32..10, 1..=4)) {
		let w = ApiVersion::from_parts(&parts).unwrap();
		for desc in enums() {
			prop_assert_eq!(registry().members_visible_at(desc.id(), &w), expected_visible(desc, &w));
		}
	}
}
