use anyhow::anyhow;

use fixmap_core::{entities::Url, repositories as repo};

type Result<T> = std::result::Result<T, repo::Error>;

pub fn load_url(url: Option<String>) -> Result<Option<Url>> {
    url.map(|url| {
        url.parse::<Url>()
            .map_err(|err| repo::Error::Other(anyhow!("Malformed URL in database: {err}")))
    })
    .transpose()
}
