pub mod investor_detail;
pub mod investors;
