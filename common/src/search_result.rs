use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::search_query::SearchQuery;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultOffers {
    pub query: SearchQuery,
    pub results: Vec<SearchResultOfferItem>,
    pub page_number: u64,
    pub page_count: u64,
    pub hit_count: u64,
}

impl SearchResultOffers {
    pub fn has_previous_page(&self) -> bool {
        self.page_number > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number.saturating_add(1) < self.page_count
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultOfferItem {
    pub object_id: String,
    pub offer_name: String,
    /// Event dates as unix timestamps; empty for template offers.
    pub offer_dates: Vec<i64>,
    pub offer_thumb_url: Option<String>,
    pub venue_name: String,
    pub venue_public_name: Option<String>,
    pub is_template: bool,
    pub result_index_in_page: u64,
}

impl SearchResultOfferItem {
    pub fn venue_display_name(&self) -> &str {
        match &self.venue_public_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.venue_name,
        }
    }

    /// "Le 12/03/2024" for one date, "Du 12/03/2024 au 15/03/2024" for several.
    pub fn offer_dates_label(&self) -> Option<String> {
        let mut timestamps = self.offer_dates.clone();
        timestamps.sort_unstable();
        let mut dates = timestamps
            .into_iter()
            .filter_map(|ts| DateTime::from_timestamp(ts, 0))
            .map(|date| date.format("%d/%m/%Y").to_string())
            .collect::<Vec<_>>();
        dates.dedup();
        match dates.as_slice() {
            [] => None,
            [date] => Some(format!("Le {date}")),
            [first, .., last] => Some(format!("Du {first} au {last}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(dates: Vec<i64>, public_name: Option<&str>) -> SearchResultOfferItem {
        SearchResultOfferItem {
            object_id: "1".to_string(),
            offer_name: "Concert pédagogique".to_string(),
            offer_dates: dates,
            offer_thumb_url: None,
            venue_name: "SARL Salle de concert".to_string(),
            venue_public_name: public_name.map(|s| s.to_string()),
            is_template: false,
            result_index_in_page: 0,
        }
    }

    #[test]
    fn dates_label() {
        assert_eq!(offer(vec![], None).offer_dates_label(), None);
        assert_eq!(offer(vec![1_710_241_200], None).offer_dates_label(), Some("Le 12/03/2024".to_string()));
        assert_eq!(
            offer(vec![1_710_500_400, 1_710_241_200, 1_710_244_800], None).offer_dates_label(),
            Some("Du 12/03/2024 au 15/03/2024".to_string())
        );
        assert_eq!(offer(vec![1_710_241_200, 1_710_244_800], None).offer_dates_label(), Some("Le 12/03/2024".to_string()));
    }

    #[test]
    fn venue_display_name_prefers_public_name() {
        assert_eq!(offer(vec![], Some("La Salle")).venue_display_name(), "La Salle");
        assert_eq!(offer(vec![], Some(" ")).venue_display_name(), "SARL Salle de concert");
        assert_eq!(offer(vec![], None).venue_display_name(), "SARL Salle de concert");
    }

    #[test]
    fn page_navigation_bounds() {
        let page = |page_number: u64, page_count: u64| SearchResultOffers {
            query: SearchQuery::default(),
            results: vec![],
            page_number,
            page_count,
            hit_count: 0,
        };
        assert!(page(0, 3).has_next_page());
        assert!(!page(0, 3).has_previous_page());
        assert!(!page(2, 3).has_next_page());
        assert!(page(2, 3).has_previous_page());
        assert!(!page(u64::MAX, u64::MAX).has_next_page());
    }
}
