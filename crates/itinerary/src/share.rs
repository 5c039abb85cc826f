use rand::Rng;
use url::Url;

const SHARE_PATH: &str = "shared-itinerary";
const SHARE_ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fabricates a share link under `origin`.
///
/// Nothing is stored anywhere: the id is random, so two links for the same
/// itinerary are unrelated and can't be resolved back.
pub fn share_link<R: Rng>(origin: &Url, rng: &mut R) -> anyhow::Result<Url> {
    let id = share_id(rng);
    let link = origin.join(&format!("/{SHARE_PATH}/{id}"))?;

    tracing::debug!(%link, "share link created");

    Ok(link)
}

pub fn share_id<R: Rng>(rng: &mut R) -> String {
    (0..SHARE_ID_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}
