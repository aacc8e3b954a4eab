//! Content resources: news, categories, advertisements, congress, homepage

use async_trait::async_trait;

use crate::client::body::Payload;
use crate::client::http::RegistryClient;
use crate::client::models::{
    Advertisement, AdvertisementPayload, Category, CongressParticipant, HomePage, HomePagePayload,
    NewsItem, NewsPayload, NewsUpdatePayload,
};
use crate::error::Result;

#[async_trait]
pub trait ContentApi {
    async fn list_news(&self) -> Result<Vec<NewsItem>>;
    async fn news_for_category(&self, category_id: i64) -> Result<Vec<NewsItem>>;
    async fn get_news(&self, id: i64) -> Result<NewsItem>;
    async fn create_news(&self, payload: &NewsPayload) -> Result<NewsItem>;
    async fn update_news(&self, id: i64, payload: &NewsUpdatePayload) -> Result<NewsItem>;
    async fn delete_news(&self, id: i64) -> Result<()>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn list_advertisements(&self) -> Result<Vec<Advertisement>>;
    async fn get_advertisement(&self, id: i64) -> Result<Advertisement>;
    async fn create_advertisement(&self, payload: &AdvertisementPayload) -> Result<Advertisement>;
    async fn update_advertisement(
        &self,
        id: i64,
        payload: &AdvertisementPayload,
    ) -> Result<Advertisement>;
    async fn delete_advertisement(&self, id: i64) -> Result<()>;

    async fn list_congress_participants(&self) -> Result<Vec<CongressParticipant>>;
    /// Toggle a registration's payment flag; callers re-fetch the list
    async fn set_congress_payment(&self, id: i64, paid: bool) -> Result<()>;
    async fn delete_congress_participant(&self, id: i64) -> Result<()>;

    async fn get_homepage(&self) -> Result<HomePage>;
    async fn update_homepage(&self, id: i64, payload: &HomePagePayload) -> Result<HomePage>;
}

#[async_trait]
impl ContentApi for RegistryClient {
    async fn list_news(&self) -> Result<Vec<NewsItem>> {
        self.get_json("/news").await
    }

    async fn news_for_category(&self, category_id: i64) -> Result<Vec<NewsItem>> {
        self.get_json(&format!("/newsForCategory/{}", category_id)).await
    }

    async fn get_news(&self, id: i64) -> Result<NewsItem> {
        self.get_json(&format!("/news/{}", id)).await
    }

    async fn create_news(&self, payload: &NewsPayload) -> Result<NewsItem> {
        self.post("/news", payload.to_body()?).await
    }

    async fn update_news(&self, id: i64, payload: &NewsUpdatePayload) -> Result<NewsItem> {
        self.put(&format!("/news/{}", id), payload.to_body()?).await
    }

    async fn delete_news(&self, id: i64) -> Result<()> {
        self.delete(&format!("/news/{}", id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/category").await
    }

    async fn list_advertisements(&self) -> Result<Vec<Advertisement>> {
        self.get_json("/advertisments").await
    }

    async fn get_advertisement(&self, id: i64) -> Result<Advertisement> {
        self.get_json(&format!("/advertisments/{}", id)).await
    }

    async fn create_advertisement(&self, payload: &AdvertisementPayload) -> Result<Advertisement> {
        self.post("/advertisments", payload.to_body()?).await
    }

    async fn update_advertisement(
        &self,
        id: i64,
        payload: &AdvertisementPayload,
    ) -> Result<Advertisement> {
        self.put(&format!("/advertisments/{}", id), payload.to_body()?).await
    }

    async fn delete_advertisement(&self, id: i64) -> Result<()> {
        self.delete(&format!("/advertisments/{}", id)).await
    }

    async fn list_congress_participants(&self) -> Result<Vec<CongressParticipant>> {
        self.get_json("/congress").await
    }

    async fn set_congress_payment(&self, id: i64, paid: bool) -> Result<()> {
        self.put_empty(&format!("/payment/{}/{}", id, if paid { 1 } else { 0 }))
            .await
    }

    async fn delete_congress_participant(&self, id: i64) -> Result<()> {
        self.delete(&format!("/congress/{}", id)).await
    }

    async fn get_homepage(&self) -> Result<HomePage> {
        self.get_json("/homePage").await
    }

    async fn update_homepage(&self, id: i64, payload: &HomePagePayload) -> Result<HomePage> {
        self.put(&format!("/homePage/{}", id), payload.to_body()?).await
    }
}
