//! Distributed virtual switch enumerations.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Port binding model of a distributed port group.
	pub enum DistributedVirtualPortgroupPortgroupType {
		EarlyBinding = "earlyBinding",
		/// Deprecated since 5.0; servers still report it for upgraded port groups.
		LateBinding = "lateBinding",
		Ephemeral = "ephemeral",
	}
}

vim_enum! {
	pub enum DistributedVirtualSwitchHostMemberHostComponentState {
		Up = "up",
		Pending = "pending",
		OutOfSync = "outOfSync",
		Warning = "warning",
		Disconnected = "disconnected",
		Down = "down",
	}
}

vim_enum! {
	/// Uplink teaming policy. The wire tokens use snake case.
	pub enum DistributedVirtualSwitchNicTeamingPolicyMode {
		LoadbalanceIp = "loadbalance_ip",
		LoadbalanceSrcmac = "loadbalance_srcmac",
		LoadbalanceSrcid = "loadbalance_srcid",
		FailoverExplicit = "failover_explicit",
		LoadbalanceLoadbased = "loadbalance_loadbased",
	}
}
