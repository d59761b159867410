mod book;
mod timeout;

pub use self::book::*;
