use std::collections::HashSet;
use std::str::FromStr;

use pretty_assertions::assert_eq;

use super::*;

crate::vim_enum! {
	/// Power state used by the contract tests.
	///
	/// Second line is not part of the summary.
	pub enum ContractPowerState {
		/// Powered on.
		PoweredOn = "poweredOn",
		PoweredOff = "poweredOff",
		StandBy = "standBy",
		Unknown = "unknown",
	}
}

#[test]
fn members_are_canonical_and_ordered() {
	let members = ContractPowerState::members();
	assert_eq!(
		members,
		vec![
			ContractPowerState::PoweredOn,
			ContractPowerState::PoweredOff,
			ContractPowerState::StandBy,
			ContractPowerState::Unknown,
		]
	);
	assert_eq!(
		ContractPowerState::member_strings(),
		vec!["poweredOn", "poweredOff", "standBy", "unknown"]
	);
	assert_eq!(ContractPowerState::members(), members);
}

#[test]
fn member_strings_match_as_str() {
	let rendered: Vec<_> = ContractPowerState::members()
		.iter()
		.map(|m| m.as_str().to_owned())
		.collect();
	assert_eq!(rendered, ContractPowerState::member_strings());
}

#[test]
fn strict_parse_rejects_unknown() {
	assert_eq!(
		ContractPowerState::parse_strict("standBy"),
		Ok(ContractPowerState::StandBy)
	);
	assert_eq!(
		ContractPowerState::parse_strict("poweredSideways"),
		Err(RegistryError::UnknownMember {
			id: "ContractPowerState".into(),
			member: "poweredSideways".into(),
		})
	);
	assert!(ContractPowerState::from_str("PoweredOn").is_err());
}

#[test]
fn permissive_parse_keeps_raw_string() {
	let value = ContractPowerState::parse_permissive("poweredSideways");
	assert!(!value.is_known());
	assert_eq!(value.as_str(), "poweredSideways");
	assert_eq!(value.to_string(), "poweredSideways");

	let known = ContractPowerState::parse_permissive("poweredOff");
	assert!(known.is_known());
	assert!(matches!(known, ContractPowerState::PoweredOff));
}

#[test]
fn identity_is_the_string_form() {
	let opaque = ContractPowerState::unknown("poweredOn".into());
	assert_eq!(opaque, ContractPowerState::PoweredOn);
	assert!(opaque.is_known());

	let set: HashSet<_> = [opaque, ContractPowerState::PoweredOn].into_iter().collect();
	assert_eq!(set.len(), 1);
}

#[test]
fn descriptor_mirrors_the_type() {
	let desc = ContractPowerState::descriptor();
	assert_eq!(desc.id(), ContractPowerState::ID);
	assert_eq!(desc.members(), ContractPowerState::MEMBERS);
	assert_eq!(desc.origin().summary(), "Power state used by the contract tests.");
	assert!(desc.origin().module().ends_with("contract::tests"));
	assert_eq!(desc.min_version(), None);
}

#[test]
fn serde_is_a_plain_string() {
	let json = serde_json::to_string(&ContractPowerState::StandBy).unwrap();
	assert_eq!(json, "\"standBy\"");

	let back: ContractPowerState = serde_json::from_str("\"poweredSideways\"").unwrap();
	assert_eq!(back.as_str(), "poweredSideways");
	assert_eq!(serde_json::to_string(&back).unwrap(), "\"poweredSideways\"");
}

crate::vim_enum! {
	/// Enumeration with a member spelled like the fallback variant.
	pub enum ContractVisibility {
		Visible = "visible",
		OpaqueMember = "opaque",
	}
}

#[test]
fn opaque_member_is_not_the_fallback() {
	let member = ContractVisibility::parse_strict("opaque").unwrap();
	assert!(matches!(member, ContractVisibility::OpaqueMember));
	assert!(member.is_known());

	let fallback = ContractVisibility::parse_permissive("Opaque");
	assert!(matches!(fallback, ContractVisibility::Opaque(_)));
	assert!(!fallback.is_known());
	assert_ne!(fallback, member);
	assert_eq!(ContractVisibility::member_strings(), vec!["visible", "opaque"]);
}
