//! End to end compilation of one ICSS document.

pub mod pipeline;
