//! In-memory implementation of the content store traits.
//!
//! Each collection is an id-keyed map behind its own `RwLock`, so reads run
//! concurrently and inserts are serialized per collection.

mod connection;
mod course;
mod education;
mod project;
mod seed;
mod skill;
mod table;


pub use connection::MemoryDatabase;
pub use course::MemoryCourseRepository;
pub use education::MemoryEducationRepository;
pub use project::MemoryProjectRepository;
pub use skill::MemorySkillRepository;
