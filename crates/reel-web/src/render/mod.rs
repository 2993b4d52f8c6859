mod stage;

pub use stage::{CaptionNodes, DomStage, SelectorNodes};
