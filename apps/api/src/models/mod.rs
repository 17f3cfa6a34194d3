pub mod job;
pub mod preferences;
pub mod profile;
pub mod report;
