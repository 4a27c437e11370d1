pub mod exp;
mod never;

pub use exp::*;
pub use never::Never;
