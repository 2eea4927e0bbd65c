use std::sync::Arc;

use crate::providers::image_search::{ImageSearch, ImageSearchError};

const QUERY_SUFFIX: &str = " food";

/// Picks a representative photo for an (English) meal name.
#[derive(Clone)]
pub struct ImageResolver {
    search: Arc<dyn ImageSearch>,
}

impl ImageResolver {
    pub fn new(search: Arc<dyn ImageSearch>) -> Self {
        Self { search }
    }

    /// Thumbnail of the top hit for `"<query> food"`, or `None` when the
    /// provider has nothing. Provider failures are passed through.
    pub async fn resolve_image(&self, query: &str) -> Result<Option<String>, ImageSearchError> {
        let results = self
            .search
            .search_images(&format!("{}{}", query, QUERY_SUFFIX))
            .await?;

        Ok(results.into_iter().next().map(|hit| hit.thumbnail))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::providers::image_search::ImageResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves canned thumbnails and records the queries it saw.
    #[derive(Default)]
    pub(crate) struct FakeImageSearch {
        pub thumbnails: Vec<String>,
        pub fail_on: Option<String>,
        pub queries: Mutex<Vec<String>>,
    }

    impl FakeImageSearch {
        pub(crate) fn with_thumbnails(thumbnails: &[&str]) -> Self {
            Self {
                thumbnails: thumbnails.iter().map(|t| t.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ImageSearch for FakeImageSearch {
        async fn search_images(&self, query: &str) -> Result<Vec<ImageResult>, ImageSearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail_on.as_deref().is_some_and(|bad| query.contains(bad)) {
                return Err(ImageSearchError::Api {
                    status: 401,
                    message: "Invalid API key".to_string(),
                });
            }
            Ok(self
                .thumbnails
                .iter()
                .map(|thumbnail| ImageResult {
                    thumbnail: thumbnail.clone(),
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_returns_first_thumbnail() {
        let search = Arc::new(FakeImageSearch::with_thumbnails(&["http://img/1.png", "http://img/2.png"]));
        let resolver = ImageResolver::new(search.clone());

        let url = resolver.resolve_image("oatmeal").await.unwrap();
        assert_eq!(url.as_deref(), Some("http://img/1.png"));
        assert_eq!(*search.queries.lock().unwrap(), vec!["oatmeal food".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_results_are_none() {
        let resolver = ImageResolver::new(Arc::new(FakeImageSearch::default()));
        assert_eq!(resolver.resolve_image("salad").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let search = FakeImageSearch {
            fail_on: Some("salad".to_string()),
            ..FakeImageSearch::default()
        };
        let resolver = ImageResolver::new(Arc::new(search));
        assert!(resolver.resolve_image("salad").await.is_err());
    }
}
