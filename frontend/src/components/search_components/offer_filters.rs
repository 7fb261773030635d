use dioxus::prelude::*;
use common::{
    facet_composition::FilterSelection,
    select_option::{SelectOption, department_options, student_options},
};
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdArrowDropDown, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::{api::adage_api::list_educational_categories, components::error_boundary::ComponentErrorDisplay};


#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterField {
    Departments,
    Categories,
    Students,
}

impl FilterField {
    fn label(self) -> &'static str {
        match self {
            FilterField::Departments => "Département",
            FilterField::Categories => "Catégorie",
            FilterField::Students => "Niveau scolaire",
        }
    }

    fn selected(self, selection: &FilterSelection) -> &Vec<SelectOption> {
        match self {
            FilterField::Departments => &selection.departments,
            FilterField::Categories => &selection.categories,
            FilterField::Students => &selection.students,
        }
    }

    fn selected_mut(self, selection: &mut FilterSelection) -> &mut Vec<SelectOption> {
        match self {
            FilterField::Departments => &mut selection.departments,
            FilterField::Categories => &mut selection.categories,
            FilterField::Students => &mut selection.students,
        }
    }
}

#[derive(Clone, Copy)]
struct FilterContext {
    selection: Signal<FilterSelection>,
    expanded_filter: Signal<Option<FilterField>>,
}

/// Filter form. Nothing reaches the search until "Lancer la recherche" is clicked.
#[component]
pub fn OfferFilters(on_submit: Callback<FilterSelection>, error: ReadSignal<Option<String>>) -> Element {
    let mut selection = use_signal(FilterSelection::default);
    let mut expanded_filter = use_signal(|| None::<FilterField>);
    use_context_provider(|| FilterContext { selection, expanded_filter });

    let category_options = use_resource(move || list_educational_categories()).suspend()?.cloned();
    let category_options = match category_options {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("Impossible de charger les catégories : {e}") }},
        Ok(c) => c,
    };
    let has_selection = !selection.read().is_empty();

    rsx! {
        div {
            id: "x-offer-filters",
            class: "x-offer-filters",
            FilterDropdown { field: FilterField::Departments, options: department_options() }
            FilterDropdown { field: FilterField::Categories, options: category_options }
            FilterDropdown { field: FilterField::Students, options: student_options() }

            button {
                class: "x-primary-button",
                onclick: move |_| {
                    expanded_filter.set(None);
                    on_submit.call(selection.read().clone());
                },
                "Lancer la recherche"
            }
            if has_selection {
                button {
                    class: "x-secondary-button",
                    onclick: move |_| {
                        expanded_filter.set(None);
                        selection.set(FilterSelection::default());
                    },
                    "Réinitialiser les filtres"
                }
            }
        }
        if let Some(error) = error() {
            ComponentErrorDisplay { error_txt: error }
        }
    }
}

#[component]
fn FilterDropdown(field: FilterField, options: Vec<SelectOption>) -> Element {
    let mut context = use_context::<FilterContext>();
    let is_expanded = *context.expanded_filter.read() == Some(field);
    let selected_count = field.selected(&context.selection.read()).len();
    let button_class = if selected_count > 0 { "x-filter-button x-filter-button-active" } else { "x-filter-button" };

    rsx! {
        div {
            class: "x-filter-dropdown",
            button {
                class: button_class,
                onclick: move |_| {
                    let next = if is_expanded { None } else { Some(field) };
                    context.expanded_filter.set(next);
                },
                "{field.label()}"
                if selected_count > 0 {
                    span { class: "x-filter-count", "{selected_count}" }
                }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            }
            if is_expanded {
                ul {
                    class: "x-filter-options",
                    for option in options {
                        li {
                            key: "{option.label}",
                            FilterCheckbox { field, option: option.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterCheckbox(field: FilterField, option: SelectOption) -> Element {
    let mut context = use_context::<FilterContext>();
    let is_checked = field.selected(&context.selection.read()).contains(&option);
    let label = option.label.clone();

    rsx! {
        div {
            class: "x-filter-option",
            onclick: move |_e| {
                let mut selection = context.selection.write();
                let selected = field.selected_mut(&mut selection);
                if let Some(position) = selected.iter().position(|o| o == &option) {
                    selected.remove(position);
                } else {
                    selected.push(option.clone());
                }
            },
            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #870087; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                class: "x-filter-option-label",
                "{label}"
            }
        }
    }
}
