mod accumulator;
mod error;
mod factory;
mod sql_writer;
mod table;
mod util;
mod value;

pub use accumulator::*;
pub use error::*;
pub use factory::*;
pub use sql_writer::*;
pub use table::*;
pub use util::*;
pub use value::*;
