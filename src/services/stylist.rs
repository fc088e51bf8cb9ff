use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CartItem, Catalog, Origin, Product, Recommendation, Suggestion},
    services::{
        providers::{
            ChatCompletionSource, ExternalSuggestion, SourceFailure, StylingRequest,
            SuggestionSource,
        },
        recommendations,
    },
};

/// Two-tier outfit stylist
///
/// Tries the external source once (when one is configured), validates its answer
/// against the catalog, and otherwise runs the local heuristic. External and local
/// results are never mixed.
#[derive(Clone)]
pub struct StylistService {
    source: Option<Arc<dyn SuggestionSource>>,
    timeout: Duration,
}

impl StylistService {
    pub fn new(source: Option<Arc<dyn SuggestionSource>>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Heuristic only
    pub fn local() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn from_config(config: &Config) -> Self {
        let source = ChatCompletionSource::from_config(config)
            .map(|source| Arc::new(source) as Arc<dyn SuggestionSource>);
        if source.is_none() {
            tracing::info!("No external suggestion source configured, using heuristic only");
        }
        Self::new(source, config.external_timeout())
    }

    pub fn has_external_source(&self) -> bool {
        self.source.is_some()
    }

    #[instrument(
        skip_all,
        fields(
            current_product_id = %current_product.id,
            cart_items = cart_items.len(),
            catalog_size = catalog.len()
        )
    )]
    pub async fn suggest(
        &self,
        current_product: &Product,
        cart_items: &[CartItem],
        catalog: &Catalog,
    ) -> AppResult<Recommendation> {
        if catalog.is_empty() {
            return Err(AppError::EmptyCatalog);
        }

        if let Some(source) = &self.source {
            let request = StylingRequest::new(current_product, cart_items, catalog);
            match self.try_external(source.as_ref(), &request, catalog).await {
                Ok(suggestion) => {
                    return Ok(Recommendation {
                        suggestion,
                        origin: Origin::External {
                            source: source.name().to_string(),
                        },
                    });
                }
                Err(failure) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %failure,
                        "External suggestion failed, falling back to heuristic"
                    );
                }
            }
        }

        let suggestion = recommendations::recommend(current_product, cart_items, catalog)?;

        tracing::info!(
            suggested_product_id = %suggestion.suggested_product_id,
            tier = "heuristic",
            "Suggestion ready"
        );

        Ok(Recommendation {
            suggestion,
            origin: Origin::Heuristic,
        })
    }

    /// One bounded attempt, resolved against the catalog
    async fn try_external(
        &self,
        source: &dyn SuggestionSource,
        request: &StylingRequest,
        catalog: &Catalog,
    ) -> Result<Suggestion, SourceFailure> {
        let external = tokio::time::timeout(self.timeout, source.suggest(request))
            .await
            .map_err(|_| SourceFailure::Timeout(self.timeout))??;

        resolve_external(external, catalog)
    }
}

/// Pairs an external answer with its catalog product, keeping the source's own
/// reason and tags
pub fn resolve_external(
    external: ExternalSuggestion,
    catalog: &Catalog,
) -> Result<Suggestion, SourceFailure> {
    let product = catalog
        .find(&external.suggested_product_id)
        .ok_or_else(|| SourceFailure::UnknownProduct(external.suggested_product_id.clone()))?;

    Ok(Suggestion {
        suggested_product_id: external.suggested_product_id,
        product: product.clone(),
        reason: external.reason,
        style_tags: external.style_tags,
    })
}
