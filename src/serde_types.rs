use crate::error::Result;

/// Error document returned by S3-compatible services with a non-2xx status.
///
/// ```xml
/// <Error>
///     <Code>AccessDenied</Code>
///     <Message>Access Denied</Message>
///     <RequestId>a1b2c3d4e5f6</RequestId>
/// </Error>
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AwsError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
}

impl AwsError {
    pub fn from_body(body: &[u8]) -> Result<AwsError> {
        Ok(quick_xml::de::from_str(&String::from_utf8_lossy(body))?)
    }
}
