mod model;
mod repository;

pub use model::{JarChangesDB, JarDB, NewJarDB};
pub use repository::JarRepository;
