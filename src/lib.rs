#![allow(clippy::missing_transmute_annotations)]

pub mod chess;
pub mod eval;
pub mod thread_data;
pub mod uci;

pub use eval::{EvalPosition, Value, evaluate, trace};
