pub mod allocation;
pub mod attendance;
pub mod eligible;
pub mod raw_record;
pub mod streak;
