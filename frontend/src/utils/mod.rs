pub mod scroll;
pub mod ticker;
pub mod viewport;
