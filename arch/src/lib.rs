pub mod code;
pub mod inst;
pub mod symbols;
