pub mod density;
pub mod mass;

mod axes_draw;
