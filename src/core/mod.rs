pub mod alphabets;
pub mod config;
pub mod dictionary;
