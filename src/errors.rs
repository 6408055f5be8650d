//! Application level errors. GPU specific failures live in `video::errors` and
//! convert into `failure::Error` through `?`.

pub use failure::{Error, ResultExt};

pub type Result<T> = ::std::result::Result<T, Error>;
