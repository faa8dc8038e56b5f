use kodic_core::render_means;
use kodic_dict::MeansSource;
use kodic_store::WordStore;

/// One lookup pass for an accepted word: cache first, then the dictionary.
/// A cache hit short-circuits the network stage entirely. Returns the
/// definition to notify with, or `None` when the cycle produced nothing.
pub async fn run_cycle(
    word: &str,
    store: &dyn WordStore,
    dict: &dyn MeansSource,
) -> Option<String> {
    if let Some(means) = store.get(word).await {
        tracing::debug!("cache hit: {word}");
        return Some(means);
    }

    let fragments = dict.means_of(word).await?;
    let means = render_means(&fragments);
    store.put(word, &means).await;
    Some(means)
}
