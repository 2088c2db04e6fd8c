pub mod convert;

pub use convert::{decode_to_grid, handle_convert, ConvertResponse, __path_handle_convert};
pub use convert::{MAX_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_WIDTH};
