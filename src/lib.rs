// detailed implementation
pub mod environments;
pub mod error;
pub mod policies;

// Traits
pub mod environment; // environment trait
pub mod policy;
