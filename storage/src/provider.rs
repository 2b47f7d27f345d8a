use object_store::{local::LocalFileSystem, path::Path, ObjectStore};

use crate::{error::Result, operator::Operator, s3::S3ProviderConfig};

#[derive(Debug, Clone)]
pub enum ProviderConfig {
    S3(S3ProviderConfig),
    /// Local filesystem storage, for development and tests.
    Local { root: String },
}

impl ProviderConfig {
    /// Build an [Operator] rooted at `base_location`. For S3 the part before
    /// the first slash is the bucket and the rest becomes the path prefix;
    /// for local storage the whole location is the directory root.
    pub fn create_operator(&self, base_location: &str, public_url_base: &str) -> Result<Operator> {
        let (store, path_prefix): (Box<dyn ObjectStore>, Option<Path>) = match self {
            Self::S3(config) => {
                let (bucket, prefix) = match base_location.split_once('/') {
                    Some((bucket, prefix)) => (bucket, Some(Path::from(prefix))),
                    None => (base_location, None),
                };
                (Box::new(crate::s3::create_store(config, bucket)?), prefix)
            }
            Self::Local { root } => {
                let root = if base_location.is_empty() {
                    root.as_str()
                } else {
                    base_location
                };
                std::fs::create_dir_all(root).map_err(|e| eyre::eyre!(e))?;
                (Box::new(LocalFileSystem::new_with_prefix(root)?), None)
            }
        };

        Ok(Operator::new(store, path_prefix, public_url_base))
    }
}
