pub mod controls;
pub mod frame;
pub mod frame_json;
pub mod header;
pub mod layout;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;
