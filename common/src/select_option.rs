//! Selectable filter options (departments, categories, student levels).

use serde::{Deserialize, Serialize};

/// The value behind an option. Categories carry the ids of their subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: OptionValue,
    pub label: String,
}

impl SelectOption {
    pub fn single(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: OptionValue::Single(value.into()), label: label.into() }
    }

    pub fn multiple(values: Vec<impl Into<String>>, label: impl Into<String>) -> Self {
        Self { value: OptionValue::Multiple(values.into_iter().map(|s| s.into()).collect()), label: label.into() }
    }
}

const DEPARTMENTS: &[(&str, &str)] = &[
    ("01", "Ain"),
    ("02", "Aisne"),
    ("03", "Allier"),
    ("04", "Alpes-de-Haute-Provence"),
    ("05", "Hautes-Alpes"),
    ("06", "Alpes-Maritimes"),
    ("07", "Ardèche"),
    ("08", "Ardennes"),
    ("09", "Ariège"),
    ("10", "Aube"),
    ("11", "Aude"),
    ("12", "Aveyron"),
    ("13", "Bouches-du-Rhône"),
    ("14", "Calvados"),
    ("15", "Cantal"),
    ("16", "Charente"),
    ("17", "Charente-Maritime"),
    ("18", "Cher"),
    ("19", "Corrèze"),
    ("2A", "Corse-du-Sud"),
    ("2B", "Haute-Corse"),
    ("21", "Côte-d'Or"),
    ("22", "Côtes-d'Armor"),
    ("23", "Creuse"),
    ("24", "Dordogne"),
    ("25", "Doubs"),
    ("26", "Drôme"),
    ("27", "Eure"),
    ("28", "Eure-et-Loir"),
    ("29", "Finistère"),
    ("30", "Gard"),
    ("31", "Haute-Garonne"),
    ("32", "Gers"),
    ("33", "Gironde"),
    ("34", "Hérault"),
    ("35", "Ille-et-Vilaine"),
    ("36", "Indre"),
    ("37", "Indre-et-Loire"),
    ("38", "Isère"),
    ("39", "Jura"),
    ("40", "Landes"),
    ("41", "Loir-et-Cher"),
    ("42", "Loire"),
    ("43", "Haute-Loire"),
    ("44", "Loire-Atlantique"),
    ("45", "Loiret"),
    ("46", "Lot"),
    ("47", "Lot-et-Garonne"),
    ("48", "Lozère"),
    ("49", "Maine-et-Loire"),
    ("50", "Manche"),
    ("51", "Marne"),
    ("52", "Haute-Marne"),
    ("53", "Mayenne"),
    ("54", "Meurthe-et-Moselle"),
    ("55", "Meuse"),
    ("56", "Morbihan"),
    ("57", "Moselle"),
    ("58", "Nièvre"),
    ("59", "Nord"),
    ("60", "Oise"),
    ("61", "Orne"),
    ("62", "Pas-de-Calais"),
    ("63", "Puy-de-Dôme"),
    ("64", "Pyrénées-Atlantiques"),
    ("65", "Hautes-Pyrénées"),
    ("66", "Pyrénées-Orientales"),
    ("67", "Bas-Rhin"),
    ("68", "Haut-Rhin"),
    ("69", "Rhône"),
    ("70", "Haute-Saône"),
    ("71", "Saône-et-Loire"),
    ("72", "Sarthe"),
    ("73", "Savoie"),
    ("74", "Haute-Savoie"),
    ("75", "Paris"),
    ("76", "Seine-Maritime"),
    ("77", "Seine-et-Marne"),
    ("78", "Yvelines"),
    ("79", "Deux-Sèvres"),
    ("80", "Somme"),
    ("81", "Tarn"),
    ("82", "Tarn-et-Garonne"),
    ("83", "Var"),
    ("84", "Vaucluse"),
    ("85", "Vendée"),
    ("86", "Vienne"),
    ("87", "Haute-Vienne"),
    ("88", "Vosges"),
    ("89", "Yonne"),
    ("90", "Territoire de Belfort"),
    ("91", "Essonne"),
    ("92", "Hauts-de-Seine"),
    ("93", "Seine-Saint-Denis"),
    ("94", "Val-de-Marne"),
    ("95", "Val-d'Oise"),
    ("971", "Guadeloupe"),
    ("972", "Martinique"),
    ("973", "Guyane"),
    ("974", "La Réunion"),
    ("975", "Saint-Pierre-et-Miquelon"),
    ("976", "Mayotte"),
    ("977", "Saint-Barthélemy"),
    ("978", "Saint-Martin"),
    ("986", "Wallis-et-Futuna"),
    ("987", "Polynésie française"),
    ("988", "Nouvelle-Calédonie"),
];

const STUDENT_LEVELS: &[&str] = &[
    "Collège - 4e",
    "Collège - 3e",
    "CAP - 1re année",
    "CAP - 2e année",
    "Lycée - Seconde",
    "Lycée - Première",
    "Lycée - Terminale",
];

/// Departments as `"<code> - <name>"` labelled options, ordered by code.
pub fn department_options() -> Vec<SelectOption> {
    DEPARTMENTS
        .iter()
        .map(|(code, name)| SelectOption::single(*code, format!("{code} - {name}")))
        .collect()
}

/// School levels that collective offers can target.
pub fn student_options() -> Vec<SelectOption> {
    STUDENT_LEVELS.iter().map(|level| SelectOption::single(*level, *level)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_value_parses_scalar_and_list() {
        let department: SelectOption = serde_json::from_str(r#"{"value":"75","label":"75 - Paris"}"#).unwrap();
        assert_eq!(department.value, OptionValue::Single("75".to_string()));

        let category: SelectOption = serde_json::from_str(r#"{"value":["SUB1","SUB2"],"label":"Cinéma"}"#).unwrap();
        assert_eq!(category.value, OptionValue::Multiple(vec!["SUB1".to_string(), "SUB2".to_string()]));
    }

    #[test]
    fn department_catalog_includes_corsica_and_overseas() {
        let options = department_options();
        let codes = options
            .iter()
            .filter_map(|o| match &o.value {
                OptionValue::Single(code) => Some(code.as_str()),
                OptionValue::Multiple(_) => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(codes.len(), options.len());
        assert!(codes.contains(&"2A"));
        assert!(codes.contains(&"974"));
        assert_eq!(options[0].label, "01 - Ain");
    }

    #[test]
    fn student_levels_use_label_as_value() {
        for option in student_options() {
            assert_eq!(option.value, OptionValue::Single(option.label.clone()));
        }
    }
}
