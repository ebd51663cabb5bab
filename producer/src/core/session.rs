//! Provider session bootstrap

use shared::{process_debug, ProcessId};

use crate::error::{ProducerError, ProducerResult};
use crate::traits::ChatProvider;
use crate::types::SessionUser;

/// Make sure the provider has a signed-in session
///
/// Errors from the session query are ignored and treated as "not signed in";
/// only a failed sign-in is reported.
pub async fn ensure_session<P>(provider: &P) -> ProducerResult<SessionUser>
where
    P: ChatProvider + ?Sized,
{
    match provider.current_user().await {
        Ok(Some(user)) => return Ok(user),
        Ok(None) => {}
        Err(e) => {
            process_debug!(ProcessId::current(), "Session query on {} failed, signing in: {}", provider.name(), e);
        }
    }

    provider.sign_in().await.map_err(|reason| ProducerError::AuthError {
        message: format!("{} sign-in failed: {}", provider.name(), reason),
    })
}
