pub mod code;
mod status;

pub use status::status_name;
pub use status::Status;
