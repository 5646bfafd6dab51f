pub mod field_render;
mod field_state;

pub use field_state::FieldState;
