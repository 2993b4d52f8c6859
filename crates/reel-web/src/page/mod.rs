//! Page features, each mounted only when its markup is present.

pub mod carousel;
pub mod chrome;
pub mod contact;
pub mod frame;
pub mod projects;
pub mod reveal;
