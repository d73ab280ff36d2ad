pub mod commitments;
pub mod common;
pub mod investors;
pub mod layout;
