//! Email status lookup through the SendPulse API.
//!
//! Every lookup performs a fresh token exchange followed by the status call.
//! The flow is all-or-nothing: the first failing step ends the request.

use crate::error::AppError;
use crate::models::status::{StatusReply, StatusResponse};
use crate::services::sendpulse::SendPulseClient;
use crate::token::{self, TokenStore};

/// Look up the subscriber status for `email`.
///
/// # Process
///
/// 1. Reject an empty email (no upstream call is made)
/// 2. Exchange client credentials for an access token
/// 3. Overwrite the shared cached token
/// 4. GET `/emails/{email}` with that token as bearer
/// 5. Decode the error-object shape first, then the record array
/// 6. Return the first record
///
/// The lookup in step 4 uses the token obtained in step 2 rather than
/// re-reading the store, so a concurrent exchange cannot swap it mid-flight.
pub async fn lookup_status(
    client: &SendPulseClient,
    tokens: &TokenStore,
    email: &str,
) -> Result<StatusResponse, AppError> {
    if email.is_empty() {
        return Err(AppError::empty_email());
    }

    let access_token = client.exchange_token().await?;
    tokens.store(access_token.clone()).await;
    tracing::debug!(
        token = %token::fingerprint(&access_token),
        "SendPulse access token refreshed"
    );

    let body = client.fetch_status(email, &access_token).await?;
    tracing::debug!("SendPulse status lookup completed");

    StatusReply::parse(&body)?.into_first_record(&body)
}
