pub mod role_render;

pub use role_render::{lead_text, render_role, understudy_text};
