mod model;
mod repository;

pub use model::{InvitationDB, NewInvitationDB};
pub use repository::InvitationRepository;
