//! Client state containers.
//!
//! DESIGN
//! ======
//! State is plain data with explicit transition methods. Components hold it
//! inside an `RwSignal` provided through context and only mutate it through
//! those transitions.

pub mod generator;
