//! Where tables get created: region, optional local endpoint, SDK client.

use aws_sdk_dynamodb::Client;

/// Target of a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionTarget {
    /// Overrides the regional endpoint, e.g. a DynamoDB Local container.
    pub endpoint_url: Option<String>,
    /// Region the tables are created in.
    pub region: String,
}

impl ProvisionTarget {
    pub fn new(region: impl Into<String>, endpoint_url: Option<String>) -> Self {
        Self {
            endpoint_url,
            region: region.into(),
        }
    }

    /// Human-readable target, logged before the first create request.
    pub fn display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("DynamoDB endpoint {url}"),
            None => format!("DynamoDB in {}", self.region),
        }
    }
}

/// Builds a DynamoDB client for `target`.
///
/// Credentials are resolved by the default AWS provider chain.
pub async fn create_client(target: &ProvisionTarget) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(target.region.clone()));

    if let Some(endpoint) = &target.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    Client::new(&loader.load().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_remote() {
        let target = ProvisionTarget::new("us-east-1", None);
        assert_eq!(target.display(), "DynamoDB in us-east-1");
    }

    #[test]
    fn test_display_local() {
        let target = ProvisionTarget::new("us-east-1", Some("http://localhost:8000".to_string()));
        assert_eq!(
            target.display(),
            "DynamoDB endpoint http://localhost:8000"
        );
    }
}
