pub mod echo;
pub mod help;
