mod catalog;
mod command;
mod cost;
mod generate;
mod share;

pub use catalog::*;
pub use command::*;
pub use cost::*;
pub use generate::*;
pub use share::*;
