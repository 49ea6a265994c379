//! Metrics API endpoints

use super::types::{ListMetricsBody, ListMetricsOptions, ListMetricsResponse, Metric};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, warn};

/// Metrics API
#[derive(Debug, Clone, Copy)]
pub struct MetricsService<'a> {
    http: &'a HttpClient,
}

impl<'a> MetricsService<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List one page of metrics
    ///
    /// The returned `next_page` is computed from the page metadata and the
    /// sort options in `options.page`.
    pub async fn list(&self, options: &ListMetricsOptions) -> Result<ListMetricsResponse> {
        let url = self.http.endpoint(&["metrics"])?;
        let config = RequestConfig::new().queries(options.query_params());

        let body: ListMetricsBody = self.http.get_json_with_config(&url, config).await?;
        let next_page = body.query.next_page(options.page.as_ref());

        debug!(
            offset = body.query.offset,
            length = body.query.length,
            found = body.query.found,
            has_next = next_page.is_some(),
            "Listed metrics page"
        );

        Ok(ListMetricsResponse {
            metrics: body.metrics,
            this_page: body.query,
            next_page,
        })
    }

    /// Lazily walk every page, starting from `options`
    ///
    /// Stops after the last page, on the first error, or when the server
    /// returns an empty page that would not move the offset forward.
    pub fn pages(
        &self,
        options: ListMetricsOptions,
    ) -> impl Stream<Item = Result<ListMetricsResponse>> + 'a {
        let service = *self;
        stream::try_unfold(Some(options), move |state| async move {
            let Some(options) = state else {
                return Ok(None);
            };

            let page = service.list(&options).await?;
            let next = if page.this_page.length == 0 && page.next_page.is_some() {
                warn!(
                    offset = page.this_page.offset,
                    found = page.this_page.found,
                    "Empty page before end of results, stopping"
                );
                None
            } else {
                page.next_options(&options)
            };

            Ok::<_, Error>(Some((page, next)))
        })
    }

    /// Fetch every page and return all metrics in order
    pub async fn list_all(&self, options: ListMetricsOptions) -> Result<Vec<Metric>> {
        let pages: Vec<ListMetricsResponse> = self.pages(options).try_collect().await?;
        Ok(pages.into_iter().flat_map(|page| page.metrics).collect())
    }

    /// Update a metric by name
    pub async fn update(&self, metric: &Metric) -> Result<()> {
        if metric.name.trim().is_empty() {
            return Err(Error::validation("metric name must not be empty"));
        }

        let url = self.http.endpoint(&["metrics", &metric.name])?;
        let body = serde_json::to_value(metric)?;

        self.http
            .put_with_config(&url, RequestConfig::new().json(body))
            .await?;

        debug!(metric = %metric.name, "Updated metric");
        Ok(())
    }
}
