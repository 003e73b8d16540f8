use crate::domain::value_objects::ProductType;

/// Prompt used when a request carries seed data but no prompt text
pub const DEFAULT_PROMPT: &str = "A photorealistic product mockup of this design";

/// Build the mockup prompt for a product customization
///
/// The template describes the garment or item, the print placement, and
/// the studio setting the provider should render. The captured frame is
/// sent alongside as inline image data, so the prompt refers to it as
/// "this design".
pub fn mockup_prompt(product_type: ProductType, color: Option<&str>, extra: Option<&str>) -> String {
    let color = color.unwrap_or("white");

    let mut prompt = match product_type {
        ProductType::TShirt => format!(
            "A photorealistic studio photo of a {} t-shirt on a neutral background, \
             with this design printed large on the chest. Soft even lighting, \
             slight fabric texture visible, front view.",
            color
        ),
        ProductType::Hoodie => format!(
            "A photorealistic studio photo of a {} pullover hoodie on a neutral \
             background, with this design printed across the front below the \
             drawstrings. Soft even lighting, front view.",
            color
        ),
        ProductType::Mug => format!(
            "A photorealistic studio photo of a {} ceramic mug on a clean tabletop, \
             with this design wrapped on the side facing the camera. Warm soft \
             lighting, shallow depth of field.",
            color
        ),
        ProductType::Poster => format!(
            "A photorealistic photo of a framed matte poster of this design hanging \
             on a {} wall in a bright modern room. Straight-on view, natural \
             daylight.",
            color
        ),
    };

    if let Some(extra) = extra {
        let extra = extra.trim();
        if !extra.is_empty() {
            prompt.push(' ');
            prompt.push_str(extra);
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_product_and_color() {
        let prompt = mockup_prompt(ProductType::TShirt, Some("black"), None);
        assert!(prompt.contains("black t-shirt"));
        assert!(prompt.contains("this design"));

        let prompt = mockup_prompt(ProductType::Mug, Some("red"), None);
        assert!(prompt.contains("red ceramic mug"));
    }

    #[test]
    fn test_default_color() {
        let prompt = mockup_prompt(ProductType::Hoodie, None, None);
        assert!(prompt.contains("white pullover hoodie"));
    }

    #[test]
    fn test_extra_instructions_appended() {
        let prompt = mockup_prompt(ProductType::Poster, None, Some("vintage film grain"));
        assert!(prompt.ends_with("vintage film grain"));

        let untouched = mockup_prompt(ProductType::Poster, None, Some("   "));
        assert!(!untouched.ends_with(' '));
    }

    #[test]
    fn test_each_product_type_has_distinct_template() {
        let prompts: Vec<String> = [
            ProductType::TShirt,
            ProductType::Hoodie,
            ProductType::Mug,
            ProductType::Poster,
        ]
        .iter()
        .map(|pt| mockup_prompt(*pt, None, None))
        .collect();

        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
