//! Wire DTOs specific to the HTTP layer.

pub mod response;
