pub mod extract;
pub mod palette;
pub mod scheme;
