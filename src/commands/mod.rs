mod generate;
mod util;

pub use generate::generate;
