use crate::domain::models::user::User;
use crate::domain::Session;
use shared::{SessionResponse, UserProfile};

pub struct UserMapper;

impl UserMapper {
    /// Public view of a user; the password hash never leaves the backend
    pub fn to_profile(domain: User) -> UserProfile {
        UserProfile {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            initial_balance: domain.initial_balance,
        }
    }

    pub fn to_session_response(session: Session, success_message: &str) -> SessionResponse {
        SessionResponse {
            token: session.token,
            needs_initial_balance: session.user.needs_initial_balance(),
            user: Self::to_profile(session.user),
            success_message: success_message.to_string(),
        }
    }
}
