//! Item Endpoints

use inventory_core::{ApiError, CsrfToken, NewItem};

use super::{check_status, network_error, HttpApi, CSRF_HEADER};

/// `POST /api/items/`; the created item in the response is not needed
pub(super) async fn create_item(
    api: &HttpApi,
    token: &CsrfToken,
    item: &NewItem,
) -> Result<(), ApiError> {
    let response = api
        .client
        .post(api.url("/api/items/"))
        .header(CSRF_HEADER, token.as_str())
        .json(item)
        .send()
        .await
        .map_err(network_error)?;
    check_status(response).await?;
    log::info!("[api] created item {:?}", item.name);
    Ok(())
}
