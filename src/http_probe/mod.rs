pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::*;
    pub use super::result::*;
}

use std::fmt::Write;

/// Flatten an error and its `source()` chain onto a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
