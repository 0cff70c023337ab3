pub mod error;
pub mod flags;
pub mod highlight;

pub mod fs;
pub mod parser;
pub mod path;
pub mod session;
pub mod terminal;
