//! HTML fragments for animal cards and their substitution into the page template.

use crate::domain::model::AnimalRecord;

/// Marker in the template that receives the rendered cards.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// Renders one record as a card list item.
///
/// Detail lines appear in a fixed order (location, diet, type, skin type,
/// lifespan, color, predators). Missing or blank values produce no line, and
/// only the first location is shown.
pub fn render_one(animal: &AnimalRecord) -> String {
    let mut out = String::new();

    out.push_str("<li class=\"cards__item\">\n");
    out.push_str(&format!("<div class=\"card__title\">{}</div>\n", animal.name()));
    out.push_str("<div class=\"card__text\">\n");
    out.push_str("<ul>\n");

    let location = animal.locations().and_then(|locations| locations.first());
    push_detail(&mut out, "Location", location.map(String::as_str));
    push_detail(&mut out, "Diet", animal.diet());
    push_detail(&mut out, "Type", animal.animal_type());
    push_detail(&mut out, "Skin type", animal.skin_type());
    push_detail(&mut out, "Lifespan", animal.lifespan());
    push_detail(&mut out, "Color", animal.color());
    if let Some(predators) = animal.predators().filter(|p| !p.is_empty()) {
        push_detail(&mut out, "Predators", Some(&predators.to_string()));
    }

    out.push_str("</ul>\n");
    out.push_str("</div>\n");
    out.push_str("</li>\n");
    out
}

fn push_detail(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        out.push_str(&format!("<li><strong>{}:</strong> {}</li>\n", label, value));
    }
}

/// Concatenates the cards for `animals` in input order, or renders a
/// not-found heading carrying `search_term` when there is nothing to show.
pub fn render_many(animals: Option<&[AnimalRecord]>, search_term: &str) -> String {
    match animals {
        Some(animals) if !animals.is_empty() => animals.iter().map(render_one).collect(),
        _ => render_not_found(search_term),
    }
}

pub fn render_not_found(search_term: &str) -> String {
    format!("<h2>🚨 The animal '{}' doesn't exist 🚨</h2>", search_term)
}

/// Replaces every occurrence of [`PLACEHOLDER`] in `template`.
///
/// A template without the marker comes back unchanged.
pub fn substitute(template: &str, fragment: &str) -> String {
    template.replace(PLACEHOLDER, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn animal(value: serde_json::Value) -> AnimalRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_name_only_renders_empty_inner_list() {
        let html = render_one(&animal(json!({"name": "Axolotl"})));

        assert_eq!(
            html,
            "<li class=\"cards__item\">\n\
             <div class=\"card__title\">Axolotl</div>\n\
             <div class=\"card__text\">\n\
             <ul>\n\
             </ul>\n\
             </div>\n\
             </li>\n"
        );
    }

    #[test]
    fn test_detail_order_ignores_input_key_order() {
        let html = render_one(&animal(json!({
            "characteristics": {
                "predators": ["Wolf", "Eagle"],
                "color": "Red",
                "lifespan": "3 years",
                "skin_type": "Fur",
                "type": "Mammal",
                "diet": "Omnivore"
            },
            "locations": ["Forest", "Tundra"],
            "name": "Fox"
        })));

        let labels = ["Location:", "Diet:", "Type:", "Skin type:", "Lifespan:", "Color:", "Predators:"];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| html.find(label).unwrap_or_else(|| panic!("missing {}", label)))
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("<li><strong>Location:</strong> Forest</li>"));
        assert!(!html.contains("Tundra"));
        assert!(html.contains("<li><strong>Predators:</strong> ['Wolf', 'Eagle']</li>"));
    }

    #[test]
    fn test_predator_list_renders_literally() {
        let html = render_one(&animal(json!({
            "name": "Arctic Fox",
            "characteristics": {"predators": ["Polar bears", "Wolves"]}
        })));
        assert!(html.contains("<li><strong>Predators:</strong> ['Polar bears', 'Wolves']</li>"));
    }

    #[test]
    fn test_numeric_lifespan_still_renders() {
        let html = render_one(&animal(json!({
            "name": "Cheetah",
            "characteristics": {"diet": "Carnivore", "lifespan": 12}
        })));
        assert!(html.contains("<li><strong>Lifespan:</strong> 12</li>"));
    }

    #[test]
    fn test_empty_locations_skip_location_line() {
        let html = render_one(&animal(json!({"name": "Fox", "locations": []})));
        assert!(!html.contains("Location"));
    }

    #[test]
    fn test_blank_values_are_omitted() {
        let html = render_one(&animal(json!({
            "name": "Fox",
            "characteristics": {"diet": "", "color": "  ", "predators": []}
        })));

        assert!(!html.contains("Diet"));
        assert!(!html.contains("Color"));
        assert!(!html.contains("Predators"));
    }

    #[test]
    fn test_render_many_empty_yields_not_found() {
        let none: Vec<AnimalRecord> = Vec::new();
        let html = render_many(Some(none.as_slice()), "Zzyzx");

        assert_eq!(html.matches("<h2>").count(), 1);
        assert!(html.contains("Zzyzx"));
        assert!(!html.contains("<li"));
        assert!(!html.contains("<ul"));
        assert_eq!(render_many(None, "Zzyzx"), html);
    }

    #[test]
    fn test_render_many_keeps_input_order() {
        let animals = vec![
            animal(json!({"name": "Zebra"})),
            animal(json!({"name": "Aardvark"})),
        ];
        let html = render_many(Some(animals.as_slice()), "a");

        let zebra = html.find("Zebra").unwrap();
        let aardvark = html.find("Aardvark").unwrap();
        assert!(zebra < aardvark);
        assert_eq!(html, render_one(&animals[0]) + &render_one(&animals[1]));
    }

    #[test]
    fn test_substitute_replaces_placeholder() {
        let fragment = render_one(&animal(json!({"name": "Fox"})));
        let page = substitute("<html><ul>__REPLACE_ANIMALS_INFO__</ul></html>", &fragment);

        assert!(page.contains(&fragment));
        assert!(!page.contains(PLACEHOLDER));
    }

    #[test]
    fn test_substitute_without_placeholder_is_noop() {
        let template = "<html><ul></ul></html>";
        assert_eq!(substitute(template, "<li>Fox</li>"), template);
    }

    #[test]
    fn test_fox_card_inside_template() {
        let fox = animal(json!({
            "name": "Fox",
            "characteristics": {"diet": "Omnivore"},
            "locations": ["Forest"]
        }));
        let cards = render_many(Some(std::slice::from_ref(&fox)), "Fox");
        let page = substitute("<ul>__REPLACE_ANIMALS_INFO__</ul>", &cards);

        assert!(page.starts_with("<ul><li class=\"cards__item\">"));
        assert!(page.ends_with("</li>\n</ul>"));
        let fox_at = page.find("Fox").unwrap();
        let location_at = page.find("Location:</strong> Forest").unwrap();
        let diet_at = page.find("Diet:</strong> Omnivore").unwrap();
        assert!(fox_at < location_at && location_at < diet_at);
    }
}
