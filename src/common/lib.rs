pub mod camera;
pub mod clipping;
pub mod clipping_box;
pub mod depth_equation;
pub mod image_buffer;
pub mod label_renderer;
pub mod linear_solver;
pub mod math_types;
pub mod plane;
pub mod render_diagnostics;
pub mod renderer_config;
pub mod scanlines;
pub mod viewport;
