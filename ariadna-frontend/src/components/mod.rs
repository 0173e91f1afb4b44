mod map;
mod search;
mod widget;

pub use self::{map::*, search::*, widget::*};
