pub mod audition;
pub mod role;

pub use audition::Audition;
pub use role::Role;
