// client.rs
use crate::config::VisionConfig;
use crate::errors::ServiceError;
use crate::vision::models::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};
use crate::vision::prompt::{system_prompt, USER_PROMPT};
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

const USER_AGENT: &str = concat!("listing_simple/", env!("CARGO_PKG_VERSION"));

/// The one thing the extractor needs from the model: image in, reply text out.
pub trait VisionService {
    fn send(&self, image: &[u8], mime_type: &str) -> Result<String, ServiceError>;
}

impl<T: VisionService + ?Sized> VisionService for &T {
    fn send(&self, image: &[u8], mime_type: &str) -> Result<String, ServiceError> {
        (**self).send(image, mime_type)
    }
}

pub struct OpenAiVisionClient {
    client: Client,
    config: VisionConfig,
}

impl OpenAiVisionClient {
    pub fn new(config: VisionConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }
}

impl VisionService for OpenAiVisionClient {
    fn send(&self, image: &[u8], mime_type: &str) -> Result<String, ServiceError> {
        let request = build_request(&self.config, image, mime_type);

        let resp = self
            .client
            .post(self.config.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        reply_text(&text)
    }
}

/// `data:<mime>;base64,<payload>`
pub fn data_uri(image: &[u8], mime_type: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    format!("data:{mime_type};base64,{encoded}")
}

pub fn build_request(config: &VisionConfig, image: &[u8], mime_type: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(system_prompt()),
            ChatMessage::user(vec![
                ContentPart::Text {
                    text: USER_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: data_uri(image, mime_type),
                    },
                },
            ]),
        ],
        max_tokens: config.max_tokens,
    }
}

/// Pulls `choices[0].message.content` out of a completion body.
pub fn reply_text(body: &str) -> Result<String, ServiceError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ServiceError::EmptyReply)
}
