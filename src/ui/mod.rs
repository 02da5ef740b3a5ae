//! Server-rendered loading indicators shown while the gateway waits on the
//! chat backend.

mod loading;

pub use loading::*;
