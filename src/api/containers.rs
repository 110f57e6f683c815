//! Container Endpoints
//!
//! Search for the parent typeahead, plus the contents collaborator used by the browse view.

use inventory_core::{ApiError, ContainerContents, ContainerId, ContainerSummary, SearchResult};

use super::{network_error, read_json, HttpApi};

pub(super) async fn search_containers(
    api: &HttpApi,
    query: &str,
) -> Result<Vec<SearchResult>, ApiError> {
    let response = api
        .client
        .get(api.url("/api/containers/search"))
        .query(&[("text__contains", query)])
        .send()
        .await
        .map_err(network_error)?;
    let hits: Vec<SearchResult> = read_json(response).await?;
    log::debug!("[api] search {:?} -> {} hits", query, hits.len());
    Ok(hits)
}

pub(super) async fn get_container(
    api: &HttpApi,
    id: ContainerId,
) -> Result<ContainerSummary, ApiError> {
    let response = api
        .client
        .get(api.url(&format!("/api/containers/{}/", id)))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub(super) async fn get_contents(
    api: &HttpApi,
    parent: Option<ContainerId>,
) -> Result<ContainerContents, ApiError> {
    let response = api
        .client
        .get(api.url(&contents_path(parent)))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

fn contents_path(parent: Option<ContainerId>) -> String {
    match parent {
        Some(id) => format!("/api/containers/{}/contents/", id),
        None => "/api/containers/contents/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_path() {
        assert_eq!(contents_path(Some(7)), "/api/containers/7/contents/");
        assert_eq!(contents_path(None), "/api/containers/contents/");
    }
}
