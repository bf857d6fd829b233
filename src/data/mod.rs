// Uploaded tabular data
pub mod table;

// Re-export commonly used types
pub use table::DataTable;
