pub mod movie;
pub mod storage;

pub use movie::{Movie, MovieFieldError};
