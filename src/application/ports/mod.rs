//! Ports - Boundary interfaces between the module and its host

pub mod outbound;
