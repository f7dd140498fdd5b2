pub mod dispatch;
pub mod graph;
pub mod present;
pub mod source;
pub mod traverse;
