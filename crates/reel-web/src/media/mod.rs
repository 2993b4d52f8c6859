mod video;

pub use video::VideoElement;
