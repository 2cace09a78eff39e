//! Invitations module - domain model, traits, and resolution.

mod invitations_model;
mod invitations_service;
mod invitations_traits;

pub use invitations_model::Invitation;
pub use invitations_service::InvitationService;
pub use invitations_traits::{InvitationRepositoryTrait, InvitationServiceTrait};

#[cfg(test)]
mod invitations_service_tests;
