pub mod offers_search;
pub mod offer_filters;
pub mod search_box;
pub mod offers_result_list;
pub mod offer_card;
pub mod pagination;
