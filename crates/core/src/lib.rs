pub mod alignment;
pub mod pipeline;
pub mod session;
pub mod shared;
