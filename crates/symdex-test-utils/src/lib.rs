mod structure;
mod vocab;

pub use structure::{assert_well_formed, depth_bound};
pub use vocab::{COLLIDING_PAIR, collide_with, synthetic_vocabulary};
