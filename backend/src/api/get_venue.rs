use common::venue_filter::VenueFilter;
use serde::Deserialize;

use crate::index_utils::pro_api_client::ProApiClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VenueResponse {
    id: u64,
    name: String,
    public_name: Option<String>,
}

pub async fn get_venue(api: &ProApiClient, venue_id: u64) -> anyhow::Result<VenueFilter> {
    if venue_id == 0 {
        anyhow::bail!("invalid venue id {venue_id}");
    }
    let venue = api.get_json::<VenueResponse>(&format!("/adage-iframe/venues/{venue_id}")).await?;
    if venue.id != venue_id {
        anyhow::bail!("asked for venue {venue_id}, got venue {}", venue.id);
    }
    Ok(VenueFilter { id: venue.id, name: venue.name, public_name: venue.public_name })
}
