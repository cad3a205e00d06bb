use crate::app::AppContext;
use crate::content::{Article, ContentClient, RawArticle};
use crate::render::{render_cards, unavailable_state};
use crate::TransportResult;

/// Where the featured section's articles came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedSource {
    Featured,
    /// No article is flagged featured, so the newest are shown
    Latest,
    Fallback,
    /// Neither the API nor a fallback dataset had anything
    Unavailable,
}

/// The homepage featured section
#[derive(Debug, Clone)]
pub struct FeaturedSection {
    pub source: FeaturedSource,
    pub articles: Vec<Article>,
}

impl FeaturedSection {
    pub fn render(&self) -> String {
        match self.source {
            FeaturedSource::Unavailable => unavailable_state(),
            _ => render_cards(&self.articles),
        }
    }
}

/// Loads up to `limit` articles for the featured section
///
/// Tries featured articles, then the latest page of articles if none are
/// featured. Any transport failure drops to the first `limit` fallback
/// articles.
pub async fn load_featured(ctx: &AppContext, limit: u32) -> FeaturedSection {
    match fetch(ctx.client(), limit).await {
        Ok((source, records)) => {
            let mut articles = ctx.normalizer().normalize_all(&records);
            articles.truncate(limit as usize);
            FeaturedSection { source, articles }
        }
        Err(e) if ctx.has_fallback() => {
            tracing::warn!("API not available, using fallback featured articles: {}", e);
            FeaturedSection {
                source: FeaturedSource::Fallback,
                articles: ctx.fallback().iter().take(limit as usize).cloned().collect(),
            }
        }
        Err(e) => {
            tracing::error!("Error loading featured articles: {}", e);
            FeaturedSection {
                source: FeaturedSource::Unavailable,
                articles: Vec::new(),
            }
        }
    }
}

async fn fetch(
    client: &ContentClient,
    limit: u32,
) -> TransportResult<(FeaturedSource, Vec<RawArticle>)> {
    let featured = client.featured_articles(limit).await?;
    if !featured.data.is_empty() {
        return Ok((FeaturedSource::Featured, featured.data));
    }

    tracing::debug!("No featured articles, loading latest");
    let latest = client.latest_articles(1, limit).await?;
    Ok((FeaturedSource::Latest, latest.data))
}
