pub mod simulate;
pub mod states;
