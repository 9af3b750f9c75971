// Models module for data structures
pub mod commit;
pub mod version;
