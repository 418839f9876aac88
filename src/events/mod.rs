mod pointer;

pub use pointer::{wire_pick_handlers, PickWiring};
