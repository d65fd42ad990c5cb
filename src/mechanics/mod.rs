pub mod stoch;
pub mod wheel;

pub use stoch::*;
pub use wheel::*;
