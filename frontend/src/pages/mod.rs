pub mod offers_search_page;
