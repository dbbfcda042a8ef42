use reqwest::{
    Client,
    Response,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    models::{
        CardDraft,
        Flashcard,
        SetView,
    },
    CardboxError,
};

/// Successful responses wrap their payload in a `data` field.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error responses may carry a human-readable `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateCardBody<'a> {
    word: &'a str,
    meaning: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
    set: &'a str,
}

/// Thin client over the flashcard REST endpoints. Cheap to clone, so each
/// background task takes its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reachability probe: any response at all counts as online.
    pub async fn ping(&self) -> Result<(), CardboxError> {
        self.http.get(&self.base_url).send().await?;
        Ok(())
    }

    pub async fn fetch_cards(
        &self,
        set_id: &str,
        view: SetView,
    ) -> Result<Vec<Flashcard>, CardboxError> {
        let path = match view {
            SetView::Owner => "/flashcard",
            SetView::Explore => "/flashcard/free",
        };

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[("set", set_id)])
            .send()
            .await?;

        let body: Envelope<Vec<Flashcard>> = expect_success(response).await?.json().await?;
        Ok(body.data)
    }

    pub async fn create_card(
        &self,
        set_id: &str,
        draft: &CardDraft,
    ) -> Result<Flashcard, CardboxError> {
        let body = CreateCardBody {
            word: draft.word.trim(),
            meaning: draft.meaning.trim(),
            example: optional_field(&draft.example),
            note: optional_field(&draft.note),
            set: set_id,
        };

        let response = self
            .http
            .post(format!("{}/flashcard", self.base_url))
            .json(&body)
            .send()
            .await?;

        let body: Envelope<Flashcard> = expect_success(response).await?.json().await?;
        Ok(body.data)
    }

    pub async fn delete_card(&self, id: u64) -> Result<(), CardboxError> {
        let response =
            self.http.delete(format!("{}/flashcard/{}", self.base_url, id)).send().await?;

        expect_success(response).await?;
        Ok(())
    }
}

fn optional_field(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Maps a non-success status to `CardboxError::Api`, preferring the server's
/// own `message` over generic text.
async fn expect_success(response: Response) -> Result<Response, CardboxError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    Err(CardboxError::Api(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_deserializes() {
        let json = r#"{
            "data": [
                { "id": 3, "word": "cat", "meaning": "mèo", "example": "a cat sleeps" },
                { "id": 4, "word": "dog", "meaning": "chó" }
            ]
        }"#;

        let body: Envelope<Vec<Flashcard>> = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[0].example.as_deref(), Some("a cat sleeps"));
        assert_eq!(body.data[1].note, None);
        assert_eq!(body.data[1].id, Some(4));
    }

    #[test]
    fn create_body_drops_empty_optionals() {
        let draft = CardDraft {
            word: " fish ".to_string(),
            meaning: "cá".to_string(),
            example: "   ".to_string(),
            note: String::new(),
        };

        let body = CreateCardBody {
            word: draft.word.trim(),
            meaning: draft.meaning.trim(),
            example: optional_field(&draft.example),
            note: optional_field(&draft.note),
            set: "42",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["word"], "fish");
        assert_eq!(json["meaning"], "cá");
        assert_eq!(json["set"], "42");
        assert!(json.get("example").is_none());
        assert!(json.get("note").is_none());
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{ "message": "set is full" }"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("set is full"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.message.is_none());
    }
}
