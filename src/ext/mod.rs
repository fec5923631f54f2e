pub mod boolean;
pub mod bytes;
pub mod character;
mod cipher;
pub mod collection;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod file;
pub mod guid;
pub mod net;
pub mod numeric;
pub mod object;
pub mod stream;
pub mod string;
pub mod task;
