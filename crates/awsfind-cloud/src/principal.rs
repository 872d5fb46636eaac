//! Access-key owner lookup
//!
//! Users are listed page by page and each user's keys are checked in order.
//! The scan stops at the first user holding the key, so no key listing is
//! issued for users after the match and later user pages are never fetched.
//!
//! A failed user listing is an error: the account was not scanned, which is
//! not the same as holding no owner for the key.

use crate::criteria::SearchOptions;
use crate::error::Result;
use crate::provider::{ClientContext, IdentityApi, PrincipalSummary};

/// Find the principal owning `access_key_id` in the account behind `ctx`
///
/// `Ok(None)` means every listed user was checked without a match. Key
/// listing failures for a single user are logged and that user is skipped.
pub async fn find_principal(
    ctx: &ClientContext,
    access_key_id: &str,
    options: &SearchOptions,
) -> Result<Option<PrincipalSummary>> {
    let identity = ctx.identity.as_ref();
    let mut marker: Option<String> = None;

    loop {
        let page = identity.list_users(marker.as_deref()).await?;

        for user in page.items {
            match holds_key(identity, &user.user_name, access_key_id, options.follow_pages).await
            {
                Ok(true) => return Ok(Some(user)),
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(
                        "Error listing access keys for user {} in account {}: {}",
                        user.user_name,
                        ctx.account,
                        e
                    );
                }
            }
        }

        match page.next_marker {
            Some(next) if options.follow_pages => marker = Some(next),
            _ => return Ok(None),
        }
    }
}

async fn holds_key(
    identity: &dyn IdentityApi,
    user_name: &str,
    access_key_id: &str,
    follow_pages: bool,
) -> Result<bool> {
    let mut marker: Option<String> = None;

    loop {
        let page = identity
            .list_access_keys(user_name, marker.as_deref())
            .await?;
        if page.items.iter().any(|key| key == access_key_id) {
            return Ok(true);
        }

        match page.next_marker {
            Some(next) if follow_pages => marker = Some(next),
            _ => return Ok(false),
        }
    }
}
