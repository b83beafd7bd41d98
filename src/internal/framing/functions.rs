pub mod boundary;
pub mod part_frame;

pub use boundary::{generate_boundary, multipart_content_type, random_boundary};
pub use part_frame::{encode_part_footer, encode_part_header, frame_parts, framed_length};
