// Services module for business logic
pub mod git;
pub mod release_notes;
pub mod report;
