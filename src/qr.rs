use url::Url;

/// Separator between name and phone in the encoded text. Downstream scanners
/// split on it, so it must not change.
pub const ARTIFACT_DELIMITER: &str = " | ";

const IMAGE_SIZE: &str = "400x400";

pub fn artifact_text(name: &str, phone: &str) -> String {
    format!("{}{}{}", name, ARTIFACT_DELIMITER, phone)
}

#[derive(Debug, Clone)]
pub struct QrService {
    base: Url,
}

impl QrService {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(QrService {
            base: Url::parse(base)?,
        })
    }

    pub fn image_url(&self, text: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("size", IMAGE_SIZE)
            .append_pair("data", text);
        url
    }
}
