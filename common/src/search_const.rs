//! Constants shared by the search index query builder and the result pages.

/// Number of offers shown on one result page.
pub const PAGE_SIZE: u64 = 8;

/// Attributes fetched for every hit; everything else in the index record is left out.
pub const ATTRIBUTES_TO_RETRIEVE: &[&str] = &[
    "objectID",
    "offer.dates",
    "offer.name",
    "offer.thumbUrl",
    "venue.name",
    "venue.publicName",
    "isTemplate",
];

/// No highlighting is requested from the index.
pub const ATTRIBUTES_TO_HIGHLIGHT: &[&str] = &[];
