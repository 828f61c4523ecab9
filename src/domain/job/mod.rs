//! Job aggregate and its owned collections

pub mod billing;
pub mod job;
pub mod part;
pub mod photo;
pub mod time_log;
pub mod voice_note;

pub use job::{Job, JobStatus, PropertyType, SafetyChecklist};
pub use part::Part;
pub use photo::Photo;
pub use time_log::TimeLog;
pub use voice_note::VoiceNote;
