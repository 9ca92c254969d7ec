pub mod input;

pub use input::TransactionInput;
