/// statusify is a tiny registry of well known http status codes. It maps each
/// code to its mnemonic name and back, nothing more.
mod status;

pub use status::code;
pub use status::status_name;
pub use status::Status;
