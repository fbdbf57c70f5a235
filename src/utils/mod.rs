pub mod errors;
pub mod table;

pub use errors::EscrowError;
pub use table::Table;
