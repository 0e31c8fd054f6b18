// SPDX-License-Identifier: MPL-2.0
//! Stylist prompt for the direct backend.
//!
//! The model receives the person image first and the item image second; the
//! prompt refers to them in that order.

use crate::domain::category::Category;

/// What the prompt calls the item.
#[must_use]
pub fn item_description(category: Category) -> &'static str {
    match category {
        Category::Shirt => "shirt",
        Category::Pants => "pants",
        Category::Shoes => "shoes",
        Category::Hair => "hairstyle",
    }
}

/// How the item should be placed on the person.
#[must_use]
pub fn placement_instruction(category: Category) -> &'static str {
    match category {
        Category::Shirt => {
            "dress the person in the first image with the shirt from the second image. \
             Ensure it fits naturally on their torso."
        }
        Category::Pants => {
            "dress the person in the first image with the pants from the second image. \
             Ensure they fit naturally on their legs."
        }
        Category::Shoes => {
            "put the shoes from the second image on the person's feet in the first image."
        }
        Category::Hair => {
            "replace the hairstyle of the person in the first image with the one from the \
             second image. Match the head size, angle, and blend it seamlessly with their head."
        }
    }
}

/// Builds the full prompt for `category`.
#[must_use]
pub fn stylist_prompt(category: Category) -> String {
    format!(
        "Act as a professional virtual stylist.\n\
         Your task is to realistically {placement}\n\
         - Maintain the original background, lighting, and shadows of the person's photo as much as possible.\n\
         - The final image should be photorealistic and high-quality.\n\
         - Adjust the {item} to match the person's posture and body shape.",
        placement = placement_instruction(category),
        item = item_description(category),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hair_is_described_as_hairstyle() {
        assert_eq!(item_description(Category::Hair), "hairstyle");
        assert!(stylist_prompt(Category::Hair).contains("Adjust the hairstyle"));
    }

    #[test]
    fn every_prompt_keeps_background_and_asks_for_photorealism() {
        for category in Category::ALL {
            let prompt = stylist_prompt(category);
            assert!(prompt.starts_with("Act as a professional virtual stylist."));
            assert!(prompt.contains("original background, lighting, and shadows"));
            assert!(prompt.contains("photorealistic"));
            assert!(prompt.contains(placement_instruction(category)));
        }
    }

    #[test]
    fn shoes_go_on_the_feet() {
        assert!(placement_instruction(Category::Shoes).contains("feet"));
        assert!(!stylist_prompt(Category::Shoes).contains("  "));
    }
}
