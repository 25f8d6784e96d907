pub mod geo;
pub mod hazard;
pub mod load;
pub mod site;

pub use geo::*;
pub use hazard::*;
pub use load::*;
pub use site::*;
