mod defaults;

pub use defaults::*;
