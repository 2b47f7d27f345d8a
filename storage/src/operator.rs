use bytes::Bytes;
use object_store::{path::Path, GetResult, ObjectStore};
use tracing::instrument;

use crate::error::{Error, Result};

pub struct Operator {
    store: Box<dyn ObjectStore>,
    path_prefix: Option<Path>,
    public_url_base: String,
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operator")
            .field("path_prefix", &self.path_prefix)
            .field("public_url_base", &self.public_url_base)
            .finish_non_exhaustive()
    }
}

impl Operator {
    pub fn new(
        store: Box<dyn ObjectStore>,
        path_prefix: Option<Path>,
        public_url_base: &str,
    ) -> Operator {
        Operator {
            store,
            path_prefix,
            public_url_base: public_url_base.trim_end_matches('/').to_string(),
        }
    }

    fn make_full_path(&self, location: &str) -> Path {
        match &self.path_prefix {
            Some(prefix) => prefix.child(location),
            None => Path::from(location),
        }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, location: &str) -> Result<GetResult> {
        let p = self.make_full_path(location);
        self.store.get(&p).await.map_err(Error::from)
    }

    #[instrument(skip(self, bytes))]
    pub async fn put(&self, location: &str, bytes: Bytes) -> Result<()> {
        let p = self.make_full_path(location);
        self.store.put(&p, bytes).await.map_err(Error::from)
    }

    /// The URL at which a stored object can be fetched by browsers.
    pub fn public_url(&self, location: &str) -> String {
        format!(
            "{}/{}",
            self.public_url_base,
            self.make_full_path(location)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn test_operator(prefix: Option<&str>) -> Operator {
        Operator::new(
            Box::new(InMemory::new()),
            prefix.map(Path::from),
            "https://cdn.example.com/",
        )
    }

    #[test]
    fn public_url_without_prefix() {
        let op = test_operator(None);
        assert_eq!(
            op.public_url("avatars/tem123.png"),
            "https://cdn.example.com/avatars/tem123.png"
        );
    }

    #[test]
    fn public_url_with_prefix() {
        let op = test_operator(Some("uploads"));
        assert_eq!(
            op.public_url("avatars/tem123.png"),
            "https://cdn.example.com/uploads/avatars/tem123.png"
        );
    }

    #[tokio::test]
    async fn put_then_get() {
        let op = test_operator(Some("uploads"));
        op.put("a.png", Bytes::from_static(b"pngdata"))
            .await
            .unwrap();
        let fetched = op.get("a.png").await.unwrap().bytes().await.unwrap();
        assert_eq!(fetched.as_ref(), b"pngdata");
    }
}
