use std::collections::BTreeMap;

use common::select_option::SelectOption;
use serde::Deserialize;

use crate::index_utils::pro_api_client::ProApiClient;

pub const EDUCATIONAL_CATEGORIES_PATH: &str = "/adage-iframe/collective/categories";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationalCategoriesResponse {
    categories: Vec<EducationalCategory>,
    subcategories: Vec<EducationalSubcategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationalCategory {
    id: String,
    pro_label: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationalSubcategory {
    id: String,
    category_id: String,
}

/// One option per category, holding the ids of its subcategories, sorted by label.
pub async fn list_educational_categories(api: &ProApiClient) -> anyhow::Result<Vec<SelectOption>> {
    let response = api.get_json::<EducationalCategoriesResponse>(EDUCATIONAL_CATEGORIES_PATH).await?;
    Ok(build_category_options(response))
}

fn build_category_options(response: EducationalCategoriesResponse) -> Vec<SelectOption> {
    let mut subcategories_by_category = BTreeMap::<String, Vec<String>>::new();
    for subcategory in response.subcategories {
        subcategories_by_category.entry(subcategory.category_id).or_default().push(subcategory.id);
    }

    let mut options = response
        .categories
        .into_iter()
        .filter_map(|category| {
            let subcategories = subcategories_by_category.remove(&category.id)?;
            Some(SelectOption::multiple(subcategories, category.pro_label))
        })
        .collect::<Vec<_>>();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::select_option::OptionValue;

    #[test]
    fn groups_subcategories_under_their_category() {
        let response: EducationalCategoriesResponse = serde_json::from_str(
            r#"{
                "categories": [
                    {"id": "SPECTACLE", "proLabel": "Spectacle vivant"},
                    {"id": "CINEMA", "proLabel": "Cinéma"},
                    {"id": "LIVRE", "proLabel": "Livre"}
                ],
                "subcategories": [
                    {"id": "SEANCE_CINE", "categoryId": "CINEMA"},
                    {"id": "SPECTACLE_REPRESENTATION", "categoryId": "SPECTACLE"},
                    {"id": "CINE_PLEIN_AIR", "categoryId": "CINEMA"}
                ]
            }"#,
        )
        .unwrap();

        let options = build_category_options(response);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Cinéma");
        assert_eq!(
            options[0].value,
            OptionValue::Multiple(vec!["SEANCE_CINE".to_string(), "CINE_PLEIN_AIR".to_string()])
        );
        assert_eq!(options[1].label, "Spectacle vivant");
    }
}
