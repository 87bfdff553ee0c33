mod scripted;

pub use crate::scripted::{program, ScriptedSource};
