use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::{Form, Part};
use url::Url;

use board_core::{
    FormField, Method, Payload, PendingAction, ResponseShape, XHR_HEADER, XHR_HEADER_VALUE,
};
use board_logging::board_debug;

use crate::decode::decode_body;
use crate::{BoardSettings, FailureKind, Reply, RequestError};

/// Issues exactly one HTTP request per pending action; never retries.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PendingAction) -> Result<Reply, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    csrf_header: String,
    max_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(settings: &BoardSettings) -> Result<Self, RequestError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout())
            .timeout(settings.request_timeout())
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            base_url,
            csrf_header: settings.csrf_header.clone(),
            max_bytes: settings.max_fragment_bytes,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> RequestError {
        RequestError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PendingAction) -> Result<Reply, RequestError> {
        let url = self.resolve(&request.path)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        }
        .header(XHR_HEADER, XHR_HEADER_VALUE);

        if let Some(token) = request.csrf_token.as_deref() {
            builder = builder.header(self.csrf_header.as_str(), token);
        }

        builder = match &request.payload {
            Payload::None => builder,
            Payload::Form(pairs) => {
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs)
                    .finish();
                builder
                    .header(
                        CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    )
                    .body(body)
            }
            Payload::Multipart(fields) => builder.multipart(multipart_form(fields)),
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        // JSON endpoints report application failures with 4xx plus a body,
        // so only fragment requests treat the status itself as a failure.
        if request.expect == ResponseShape::Html && !status.is_success() {
            return Err(RequestError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let body = decode_body(&bytes, content_type.as_deref())?;
        board_debug!(
            "{:?} {} -> {} ({} bytes)",
            request.method,
            url,
            status.as_u16(),
            bytes.len()
        );
        Ok(Reply::new(status.as_u16(), body))
    }
}

fn multipart_form(fields: &[(String, FormField)]) -> Form {
    fields
        .iter()
        .fold(Form::new(), |form, (name, field)| match field {
            FormField::Text(value) => form.text(name.clone(), value.clone()),
            FormField::File(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)
                    .unwrap_or_else(|_| {
                        Part::bytes(file.bytes.clone()).file_name(file.file_name.clone())
                    });
                form.part(name.clone(), part)
            }
        })
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return RequestError::new(FailureKind::Parse, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
