pub mod color_utils;
pub mod converter;
pub mod corner_size;
pub mod error;
pub mod logging;
pub mod math_utils;
pub mod models;
pub mod path;
pub mod preview;
pub mod rect_utils;
pub mod renderer;
pub mod renderer_skia;
pub mod shape;
pub mod smoothness;
pub mod utils;

pub use converter::convert_svg_to_png;
pub use corner_size::{CornerRadii, CornerSize};
pub use error::{G2Error, G2Result};
pub use models::ShapeDocument;
pub use path::{Path, PathCommand};
pub use preview::PreviewState;
pub use renderer::generate_svg;
pub use renderer_skia::render_to_png;
pub use shape::{LayoutDirection, PathStrategy, RoundedCornerShape};
pub use smoothness::CornerSmoothness;
