// Domain-layer modules and shared errors/models
pub mod contact_link {
    pub use crate::contact_link::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod sink {
    pub use crate::sink::*;
}

pub mod errors {
    pub use crate::errors::*;
}
