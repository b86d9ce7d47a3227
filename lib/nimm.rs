mod bound;
mod r#move;
mod outcome;
mod role;
mod state;

pub use bound::*;
pub use r#move::*;
pub use outcome::*;
pub use role::*;
pub use state::*;
