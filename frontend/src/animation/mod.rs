pub mod counter;
pub mod reveal;
