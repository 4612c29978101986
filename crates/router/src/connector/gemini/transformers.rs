use api_models::enums;
use base64::Engine;
use error_stack::report;
use serde::{Deserialize, Serialize};

use crate::{consts, core::errors, types};

// Request schema of the `models.generateContent` REST surface.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

fn generation_prompt(name: &str) -> String {
    format!(
        r#"Generate a product image of a dart holder organizer:
    - Black circular base designed like a mini dartboard with classic dartboard pattern
    - Has 3 darts with yellow/green striped flights standing upright on the holder
    - White text on the front edge reads exactly: "{name}"
    - Clean white/off-white studio background
    - Professional product photography style
    - The text should be the same font and size as shown on similar dart holders
    - High quality commercial product shot"#
    )
}

fn edit_prompt(name: &str) -> String {
    format!(
        r#"Edit the attached product photo of a dart holder. Replace the white text rendered on the front edge so it reads exactly: "{name}". Keep the same font, size and placement, and preserve every other part of the image unchanged: the dartboard base, the darts, the lighting and the background."#
    )
}

impl TryFrom<&types::PreviewsGenerateData> for GenerateContentRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &types::PreviewsGenerateData) -> Result<Self, Self::Error> {
        let parts = match item.variant {
            enums::PreviewVariant::Generate => vec![Part::Text(generation_prompt(&item.name))],
            enums::PreviewVariant::Edit => {
                let reference_image = item.reference_image.as_deref().ok_or_else(|| {
                    report!(errors::ConnectorError::RequestEncodingFailed)
                        .attach_printable("Edit variant requires the reference product image")
                })?;
                vec![
                    Part::Text(edit_prompt(&item.name)),
                    Part::InlineData(InlineData {
                        mime_type: mime::IMAGE_PNG.to_string(),
                        data: consts::BASE64_ENGINE.encode(reference_image),
                    }),
                ]
            }
        };

        Ok(Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        })
    }
}

// Response schema. Every level is optional on the wire; absence anywhere
// simply means no image part was produced.

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

impl GenerateContentResponse {
    /// First part of the first candidate carrying inline image data.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetails {
    pub code: Option<i32>,
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use common_utils::ext_traits::{BytesExt, Encode};

    use super::*;

    fn preview_data(variant: enums::PreviewVariant) -> types::PreviewsGenerateData {
        types::PreviewsGenerateData {
            name: "Ana".to_string(),
            variant,
            model: "gemini-2.0-flash-exp-image-generation".to_string(),
            reference_image: matches!(variant, enums::PreviewVariant::Edit)
                .then(|| vec![0x89, 0x50, 0x4e, 0x47]),
        }
    }

    #[test]
    fn generate_variant_embeds_name_in_prompt() {
        let request =
            GenerateContentRequest::try_from(&preview_data(enums::PreviewVariant::Generate))
                .unwrap();

        assert_eq!(request.contents.len(), 1);
        let Part::Text(prompt) = &request.contents[0].parts[0] else {
            panic!("expected a text part");
        };
        assert!(prompt.contains(r#"reads exactly: "Ana""#));
        assert_eq!(
            request.generation_config.response_modalities,
            vec!["TEXT", "IMAGE"]
        );
    }

    #[test]
    fn edit_variant_attaches_reference_image() {
        let request =
            GenerateContentRequest::try_from(&preview_data(enums::PreviewVariant::Edit)).unwrap();

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        let Part::InlineData(inline_data) = &parts[1] else {
            panic!("expected an inline data part");
        };
        assert_eq!(inline_data.mime_type, "image/png");
        assert_eq!(inline_data.data, "iVBORw==");
    }

    #[test]
    fn edit_variant_without_image_is_rejected() {
        let mut data = preview_data(enums::PreviewVariant::Edit);
        data.reference_image = None;

        assert!(GenerateContentRequest::try_from(&data).is_err());
    }

    #[test]
    fn request_serializes_to_camel_case() {
        let request =
            GenerateContentRequest::try_from(&preview_data(enums::PreviewVariant::Generate))
                .unwrap();
        let json = request.encode_to_string_of_json().unwrap();

        assert!(json.contains(r#""generationConfig""#));
        assert!(json.contains(r#""responseModalities":["TEXT","IMAGE"]"#));
        assert!(json.contains(r#""text""#));
    }

    #[test]
    fn response_selects_first_inline_data_part() {
        let body = bytes::Bytes::from_static(
            br#"{"candidates":[{"content":{"parts":[{"text":"Here is your preview"},{"inlineData":{"mimeType":"image/png","data":"aW1hZ2U="}}]}}]}"#,
        );
        let response: GenerateContentResponse =
            body.parse_struct("GenerateContentResponse").unwrap();

        let inline_data = response.first_inline_data().unwrap();
        assert_eq!(inline_data.mime_type, "image/png");
        assert_eq!(inline_data.data, "aW1hZ2U=");
    }

    #[test]
    fn text_only_response_yields_no_inline_data() {
        let body = bytes::Bytes::from_static(
            br#"{"candidates":[{"content":{"parts":[{"text":"No can do"}]}}]}"#,
        );
        let response: GenerateContentResponse =
            body.parse_struct("GenerateContentResponse").unwrap();

        assert!(response.first_inline_data().is_none());
    }
}
