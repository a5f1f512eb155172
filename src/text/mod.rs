pub mod instructions;
pub mod table;
