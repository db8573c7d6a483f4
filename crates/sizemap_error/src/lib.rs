mod load_error;
mod size_error;

pub use crate::{
  load_error::{LoadError, LoadResult},
  size_error::{SizeError, SizeResult},
};
