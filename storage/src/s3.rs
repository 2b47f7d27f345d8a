use http::Uri;
use object_store::aws::AmazonS3;
use tracing::{event, Level};

/// Settings for an S3-compatible object store. `endpoint` is only needed for
/// non-AWS services; the keys must be both set or both unset.
#[derive(Debug, Clone)]
pub struct S3ProviderConfig {
    pub endpoint: Option<Uri>,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_key: Option<String>,
}

pub(crate) fn create_store(
    config: &S3ProviderConfig,
    bucket: &str,
) -> Result<AmazonS3, eyre::Report> {
    if bucket.is_empty() {
        return Err(eyre::eyre!("bucket is required"));
    }

    let mut builder = object_store::aws::AmazonS3Builder::new().with_bucket_name(bucket);

    match (config.access_key_id.as_ref(), config.secret_key.as_ref()) {
        (Some(access_key_id), Some(secret_key)) => {
            builder = builder
                .with_access_key_id(access_key_id.as_str())
                .with_secret_access_key(secret_key.as_str());
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(eyre::eyre!(
                "access_key_id and secret_key must be both set or both unset"
            ))
        }
        (None, None) => {}
    };

    if let Some(endpoint) = config.endpoint.as_ref() {
        // object_store panics on an endpoint without a scheme, so fill one in.
        let e = if endpoint.scheme().is_none() {
            let parts = endpoint.to_owned().into_parts();
            let authority = parts
                .authority
                .ok_or_else(|| eyre::eyre!("endpoint is missing a host"))?;
            format!("https://{}", authority.as_str())
        } else {
            endpoint.to_string()
        };
        event!(Level::DEBUG, endpoint=%e, "Creating S3 provider with custom endpoint");
        builder = builder.with_endpoint(e);
    }

    if let Some(region) = config.region.as_ref() {
        builder = builder.with_region(region.as_str());
    }

    Ok(builder.build()?)
}
