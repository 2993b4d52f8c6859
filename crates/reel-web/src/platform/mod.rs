pub mod clock;
pub mod dom;
pub mod logger;
