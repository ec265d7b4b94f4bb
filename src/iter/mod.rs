mod owned_iter;
mod ref_iter;

pub use owned_iter::OwnedIter;
pub(crate) use ref_iter::*;
