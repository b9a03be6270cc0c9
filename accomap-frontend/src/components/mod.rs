mod map;
mod sidebar;

pub use self::{map::*, sidebar::*};
