//! Repository implementations for all ReelVault entities.

pub mod folder;
pub mod membership;
pub mod movie;
mod retry;
pub mod user;

pub use folder::FolderRepository;
pub use membership::MembershipRepository;
pub use movie::MovieRepository;
pub use user::UserRepository;
