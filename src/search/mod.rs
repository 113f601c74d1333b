pub mod alphabeta;
pub mod eval;
pub mod observer;
pub mod ordering;
