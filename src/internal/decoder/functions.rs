pub mod boundary_param;
pub mod decode_response;
pub mod part_header;

pub use boundary_param::{get_boundary, get_boundary_from_headers};
pub use decode_response::{decode_response, decode_stream, ResponseStream};
pub use part_header::decode_part_header;
