use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::{EndpointConfig, SessionConfig};
use crate::food::image::ImageResolver;
use crate::food::plan::{self, EnrichedMeal, Enricher};
use crate::food::prompt::build_meal_plan_prompt;
use crate::food::shopping::LinkBuilder;
use crate::providers::image_search::SerpApiClient;
use crate::providers::openai::OpenAIProvider;
use crate::providers::traits::CompletionProvider;
use crate::providers::translate::GoogleTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    LanguageModel,
    ImageSearch,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::LanguageModel => write!(f, "OpenAI API key"),
            Credential::ImageSearch => write!(f, "SerpApi API key"),
        }
    }
}

/// Failures that stop a plan request. Per-meal lookup problems never show up
/// here; they only leave gaps in the affected [`EnrichedMeal`].
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("{0} is missing")]
    MissingCredential(Credential),

    #[error("Meal plan request is empty")]
    EmptyRequest,

    #[error("Provider error: {0}")]
    Upstream(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    pub request_id: Uuid,
    /// Model output exactly as returned.
    pub plan: String,
    pub summary: String,
    pub meals: Vec<EnrichedMeal>,
    pub generated_at: DateTime<Utc>,
}

pub struct MealPlanner {
    provider: Box<dyn CompletionProvider + Send + Sync>,
    enricher: Enricher,
}

impl MealPlanner {
    pub fn new(provider: Box<dyn CompletionProvider + Send + Sync>, enricher: Enricher) -> Self {
        Self { provider, enricher }
    }

    pub async fn plan(&self, request: &str) -> Result<MealPlan, PlanError> {
        if request.trim().is_empty() {
            return Err(PlanError::EmptyRequest);
        }

        let request_id = Uuid::new_v4();
        let span = info_span!("meal_plan", %request_id);

        async move {
            info!("requesting meal plan");
            let plan = self
                .provider
                .complete(&build_meal_plan_prompt(request))
                .await
                .map_err(|e| PlanError::Upstream(e.to_string()))?;

            let records = plan::parse(&plan);
            let summary = plan::summarize(&records);
            info!(meals = records.len(), "plan parsed");

            let meals = self.enricher.enrich(records).await;
            info!(
                with_image = meals.iter().filter(|m| m.image_url.is_some()).count(),
                "plan enriched"
            );

            Ok::<_, PlanError>(MealPlan {
                request_id,
                plan,
                summary,
                meals,
                generated_at: Utc::now(),
            })
        }
        .instrument(span)
        .await
    }
}

/// Entry point for one session: checks credentials before touching the
/// network, wires the production clients and runs the pipeline.
pub async fn plan_meals(session: SessionConfig, endpoints: &EndpointConfig) -> Result<MealPlan, PlanError> {
    let SessionConfig {
        language_model_key,
        image_search_key,
        user_request,
    } = session;

    let language_model_key =
        language_model_key.ok_or(PlanError::MissingCredential(Credential::LanguageModel))?;
    let image_search_key =
        image_search_key.ok_or(PlanError::MissingCredential(Credential::ImageSearch))?;
    if user_request.trim().is_empty() {
        return Err(PlanError::EmptyRequest);
    }

    let provider = OpenAIProvider::new(language_model_key, endpoints)
        .await
        .map_err(|e| PlanError::Upstream(e.to_string()))?;

    let enricher = Enricher::new(
        Arc::new(GoogleTranslator::new(&endpoints.translate_url)),
        ImageResolver::new(Arc::new(SerpApiClient::with_base_url(
            image_search_key,
            &endpoints.serpapi_url,
        ))),
        LinkBuilder::new(&endpoints.shopping_search_url),
    );

    MealPlanner::new(Box::new(provider), enricher)
        .plan(&user_request)
        .await
}
