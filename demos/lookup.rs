extern crate statusify;

use statusify::code;
use statusify::status_name;

pub fn main() {
    for code in &[code::OK, code::NOT_FOUND, code::SERVICE_UNAVAILABLE, 999] {
        println!("{} => {}", code, status_name(*code));
    }
}
