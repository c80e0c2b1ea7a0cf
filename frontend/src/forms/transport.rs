use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::forms::error::TransportError;
use crate::forms::fields::{FieldValue, FieldValues};
use crate::forms::validation::SubmissionRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// Reads an HTML `method` attribute. Anything but `get` posts, which is
    /// also what browsers do for `dialog`.
    pub fn parse(method: &str) -> Self {
        if method.trim().eq_ignore_ascii_case("get") {
            FormMethod::Get
        } else {
            FormMethod::Post
        }
    }
}

/// What a successful answer has to look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// Empty or anything else; only the status matters.
    Ignored,
    /// Must parse as JSON. The value itself is not used.
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub method: FormMethod,
    pub response: ResponseBody,
}

impl Endpoint {
    /// The endpoint a form's markup declares. `action_attr` and
    /// `method_attr` are the raw attributes; `resolved_action` is the
    /// absolute URL the browser resolved from them. Without a non-blank
    /// `action` attribute the form keeps `fallback`.
    pub fn from_markup(
        fallback: Endpoint,
        action_attr: Option<&str>,
        resolved_action: &str,
        method_attr: Option<&str>,
    ) -> Endpoint {
        match action_attr.map(str::trim) {
            Some(action) if !action.is_empty() => Endpoint {
                url: if resolved_action.is_empty() {
                    action.to_string()
                } else {
                    resolved_action.to_string()
                },
                method: method_attr.map(FormMethod::parse).unwrap_or(fallback.method),
                ..fallback
            },
            _ => fallback,
        }
    }

    /// Target of a GET submission, with the fields in the query string.
    pub fn query_url(&self, fields: &FieldValues) -> String {
        let query = query_string(fields);
        if query.is_empty() {
            self.url.clone()
        } else if self.url.contains('?') {
            format!("{}&{}", self.url, query)
        } else {
            format!("{}?{}", self.url, query)
        }
    }
}

/// Urlencoded pairs the way a browser submits a GET form: files contribute
/// their file name only.
pub fn query_string(fields: &FieldValues) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            let value = match value {
                FieldValue::Text(text) => text.as_str(),
                FieldValue::File(attachment) => attachment.file_name.as_str(),
            };
            format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Carries one validated request to its endpoint.
#[async_trait(?Send)]
pub trait Transport {
    async fn deliver(&self, endpoint: &Endpoint, request: &SubmissionRequest) -> Result<(), TransportError>;
}

/// `fetch` through gloo-net with a multipart body.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn deliver(&self, endpoint: &Endpoint, request: &SubmissionRequest) -> Result<(), TransportError> {
        let outgoing = match endpoint.method {
            FormMethod::Post => Request::post(&endpoint.url).body(multipart(request.fields())?),
            FormMethod::Get => Request::get(&endpoint.query_url(request.fields())),
        };

        let response = outgoing
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        check_response(response, endpoint.response).await
    }
}

fn payload_error(e: JsValue) -> TransportError {
    TransportError::Payload(format!("{:?}", e))
}

fn multipart(fields: &FieldValues) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(payload_error)?;
    for (name, value) in fields.iter() {
        match value {
            FieldValue::Text(text) => data.append_with_str(name, text).map_err(payload_error)?,
            FieldValue::File(attachment) => {
                if let Some(file) = &attachment.blob {
                    data.append_with_blob_and_filename(name, file, &attachment.file_name)
                        .map_err(payload_error)?;
                }
            }
        }
    }
    Ok(data)
}

async fn check_response(response: Response, expected: ResponseBody) -> Result<(), TransportError> {
    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    match expected {
        ResponseBody::Ignored => Ok(()),
        ResponseBody::Json => response
            .json::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|e| TransportError::MalformedBody(e.to_string())),
    }
}
