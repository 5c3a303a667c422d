mod clock;
mod view_bindings;

pub use clock::Clock;
pub use view_bindings::{FileInputState, ViewBindings};
