mod enrollment;
mod identity;
mod subject;
mod topology;

pub use enrollment::*;
pub use identity::*;
pub use subject::*;
pub use topology::*;
