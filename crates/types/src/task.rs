//! Status enumerations shared by every managed entity.

use vmomi_registry::vim_enum;

vim_enum! {
	/// Overall alarm status of an entity.
	pub enum ManagedEntityStatus {
		/// Status is unknown.
		Gray = "gray",
		Green = "green",
		Yellow = "yellow",
		Red = "red",
	}
}

vim_enum! {
	pub enum TaskInfoState {
		Queued = "queued",
		Running = "running",
		Success = "success",
		Error = "error",
	}
}
