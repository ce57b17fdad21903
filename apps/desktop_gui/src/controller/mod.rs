//! Controller layer: user actions queued by the views and applied to the
//! single wizard state owner.

pub mod actions;
