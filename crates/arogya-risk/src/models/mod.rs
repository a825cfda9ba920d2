pub mod cancer;
pub mod diabetes;
pub mod heart_failure;
