use std::sync::Arc;

use tracing::{debug, warn};

use super::{EnrichedMeal, MealRecord};
use crate::food::image::ImageResolver;
use crate::food::shopping::LinkBuilder;
use crate::providers::translate::Translator;

/// Drives parsed records through translation, image lookup and link building.
#[derive(Clone)]
pub struct Enricher {
    translator: Arc<dyn Translator>,
    images: ImageResolver,
    links: LinkBuilder,
}

impl Enricher {
    pub fn new(translator: Arc<dyn Translator>, images: ImageResolver, links: LinkBuilder) -> Self {
        Self {
            translator,
            images,
            links,
        }
    }

    /// One record at a time, in input order. Lookup failures degrade the
    /// affected record only.
    pub async fn enrich(&self, records: Vec<MealRecord>) -> Vec<EnrichedMeal> {
        let mut enriched = Vec::with_capacity(records.len());
        for record in records {
            enriched.push(self.enrich_one(record).await);
        }
        enriched
    }

    async fn enrich_one(&self, record: MealRecord) -> EnrichedMeal {
        let translated_name = match self.translator.translate(&record.raw_name).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(name = %record.raw_name, error = %e, "translation failed, using original name");
                record.raw_name.clone()
            }
        };

        let image_url = match self.images.resolve_image(&translated_name).await {
            Ok(url) => url,
            Err(e) => {
                warn!(name = %translated_name, error = %e, "image lookup failed");
                None
            }
        };

        let purchase_link = self.links.build_link(&record.raw_name);

        debug!(
            slot = %record.slot,
            name = %record.raw_name,
            translated = %translated_name,
            has_image = image_url.is_some(),
            "meal enriched"
        );

        EnrichedMeal {
            record,
            translated_name,
            image_url,
            purchase_link,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::food::image::tests::FakeImageSearch;
    use crate::food::plan::MealSlot;
    use crate::providers::translate::TranslateError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Dictionary translator; words it does not know fail like a bad response.
    pub(crate) struct FakeTranslator {
        pub dictionary: HashMap<String, String>,
    }

    impl FakeTranslator {
        pub(crate) fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                dictionary: pairs
                    .iter()
                    .map(|(ko, en)| (ko.to_string(), en.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(&self, text: &str) -> Result<String, TranslateError> {
            self.dictionary
                .get(text)
                .cloned()
                .ok_or_else(|| TranslateError::MalformedResponse(format!("no entry for {}", text)))
        }
    }

    fn record(slot: MealSlot, name: &str, calorie: Option<&str>) -> MealRecord {
        MealRecord {
            slot,
            raw_name: name.to_string(),
            calorie: calorie.map(str::to_string),
        }
    }

    fn enricher(translator: FakeTranslator, search: Arc<FakeImageSearch>) -> Enricher {
        Enricher::new(
            Arc::new(translator),
            ImageResolver::new(search),
            LinkBuilder::new("http://shop.local/np/search"),
        )
    }

    #[tokio::test]
    async fn test_enriches_every_field_in_order() {
        let search = Arc::new(FakeImageSearch::with_thumbnails(&["http://img/1.png"]));
        let enricher = enricher(
            FakeTranslator::new(&[("오트밀", "oatmeal"), ("샐러드", "salad")]),
            search.clone(),
        );

        let meals = enricher
            .enrich(vec![
                record(MealSlot::Breakfast, "오트밀", Some("350kcal")),
                record(MealSlot::Dinner, "샐러드", None),
            ])
            .await;

        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].translated_name, "oatmeal");
        assert_eq!(meals[0].image_url.as_deref(), Some("http://img/1.png"));
        assert_eq!(meals[0].purchase_link, "http://shop.local/np/search?component=&q=오트밀");
        assert_eq!(meals[0].record.calorie.as_deref(), Some("350kcal"));
        assert_eq!(meals[1].record.slot, MealSlot::Dinner);
        assert_eq!(meals[1].translated_name, "salad");
        assert_eq!(
            *search.queries.lock().unwrap(),
            vec!["oatmeal food".to_string(), "salad food".to_string()]
        );
    }

    #[tokio::test]
    async fn test_translation_failure_falls_back_to_raw_name() {
        let search = Arc::new(FakeImageSearch::with_thumbnails(&["http://img/1.png"]));
        let enricher = enricher(FakeTranslator::new(&[]), search.clone());

        let meals = enricher
            .enrich(vec![record(MealSlot::Lunch, "비빔밥", Some("600kcal"))])
            .await;

        assert_eq!(meals[0].translated_name, "비빔밥");
        assert_eq!(*search.queries.lock().unwrap(), vec!["비빔밥 food".to_string()]);
    }

    #[tokio::test]
    async fn test_image_failure_only_affects_its_record() {
        let search = Arc::new(FakeImageSearch {
            thumbnails: vec!["http://img/ok.png".to_string()],
            fail_on: Some("tofu".to_string()),
            ..FakeImageSearch::default()
        });
        let enricher = enricher(
            FakeTranslator::new(&[("두부조림", "braised tofu"), ("김밥", "gimbap")]),
            search,
        );

        let meals = enricher
            .enrich(vec![
                record(MealSlot::Dinner, "두부조림", None),
                record(MealSlot::Lunch, "김밥", None),
            ])
            .await;

        assert_eq!(meals[0].image_url, None);
        assert_eq!(meals[0].purchase_link, "http://shop.local/np/search?component=&q=두부조림");
        assert_eq!(meals[1].image_url.as_deref(), Some("http://img/ok.png"));
    }

    #[tokio::test]
    async fn test_no_records_no_lookups() {
        let search = Arc::new(FakeImageSearch::default());
        let meals = enricher(FakeTranslator::new(&[]), search.clone()).enrich(Vec::new()).await;
        assert!(meals.is_empty());
        assert!(search.queries.lock().unwrap().is_empty());
    }
}
