mod http;
#[cfg(test)]
mod scripted;

pub use http::*;
#[cfg(test)]
pub use scripted::*;
