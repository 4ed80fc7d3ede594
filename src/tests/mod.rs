use super::*;

mod chooser;
mod common;
