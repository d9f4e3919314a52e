//! High-level runtime engine settings
//!
//! Selects how the force pass of a step is scheduled. Integration itself is
//! always fixed-step semi-implicit Euler.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub parallel: bool, // false = serial force pass, true = rayon across bodies
}
