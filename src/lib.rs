pub mod cli;
pub mod error;
pub mod inventory;
pub mod repl;
pub mod storage;
