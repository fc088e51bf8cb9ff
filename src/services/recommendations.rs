use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{CartItem, Catalog, Category, Product, Slot, StyleTag, Suggestion},
};

const NEUTRAL_COLORS: [&str; 5] = ["black", "white", "gray", "navy", "beige"];
const CLASHING_PAIRS: [(&str, &str); 3] =
    [("red", "green"), ("blue", "orange"), ("yellow", "purple")];
const REGULAR_FIT: &str = "regular";
const OVERSIZED_FIT: &str = "oversized";

/// Picks one complementary garment for the current outfit
///
/// The outfit is the current product followed by the cart items. The pick comes
/// from the first tier that yields a match:
/// 1. a strict match filling the missing top/bottom slot, colour and fit compatible
/// 2. any product filling the missing slot
/// 3. the first catalog entry that is neither viewed nor in the cart, or the
///    very first entry when every product is excluded
///
/// Pure over its inputs; fails only when the catalog is empty.
pub fn recommend(
    current_product: &Product,
    cart_items: &[CartItem],
    catalog: &Catalog,
) -> AppResult<Suggestion> {
    let fallback = catalog.first().ok_or(AppError::EmptyCatalog)?;

    let outfit: Vec<&Product> = std::iter::once(current_product)
        .chain(cart_items.iter().map(|item| &item.product))
        .collect();
    let profile = OutfitProfile::new(&outfit);
    let excluded = Exclusions::new(current_product, cart_items);

    let suggested = if let Some(product) =
        strict_match(current_product, &profile, &excluded, catalog)
    {
        tracing::debug!(product_id = %product.id, tier = "strict", "Outfit match found");
        product
    } else if let Some(product) = relaxed_match(&profile, &excluded, catalog) {
        tracing::debug!(product_id = %product.id, tier = "relaxed", "Outfit match found");
        product
    } else {
        let product = catalog.iter().find(|p| excluded.allows(p)).unwrap_or(fallback);
        tracing::debug!(
            product_id = %product.id,
            tier = "last_resort",
            "No complementary product, using first eligible catalog entry"
        );
        product
    };

    let reason = build_reason(suggested, &profile);
    let style_tags = determine_style_tags(&outfit, suggested);

    Ok(Suggestion::new(suggested.clone(), reason, style_tags))
}

/// What the outfit already contains and the attributes new pieces are compared to
struct OutfitProfile<'a> {
    categories: HashSet<&'a Category>,
    has_top: bool,
    has_bottom: bool,
    /// Colour of the first outfit item. First-wins, not the most frequent colour.
    dominant_color: &'a str,
    /// Fit of the first outfit item, same first-wins rule as the colour
    dominant_fit: &'a str,
}

impl<'a> OutfitProfile<'a> {
    fn new(outfit: &[&'a Product]) -> Self {
        let first = outfit.first().copied();
        let dominant_color = first
            .map(|p| p.color.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("neutral");
        let dominant_fit = first
            .map(|p| p.fit.as_str())
            .filter(|f| !f.is_empty())
            .unwrap_or(REGULAR_FIT);

        Self {
            categories: outfit.iter().copied().map(|p| &p.category).collect(),
            has_top: outfit.iter().any(|p| p.category.is_top()),
            has_bottom: outfit.iter().any(|p| p.category.is_bottom()),
            dominant_color,
            dominant_fit,
        }
    }

    /// The first empty slot, tops checked before bottoms
    fn missing_slot(&self) -> Option<Slot> {
        if !self.has_top {
            Some(Slot::Top)
        } else if !self.has_bottom {
            Some(Slot::Bottom)
        } else {
            None
        }
    }
}

/// Products that must never be suggested: the one being viewed and anything in the cart
struct Exclusions<'a> {
    current_id: &'a str,
    cart_ids: HashSet<&'a str>,
}

impl<'a> Exclusions<'a> {
    fn new(current_product: &'a Product, cart_items: &'a [CartItem]) -> Self {
        Self {
            current_id: &current_product.id,
            cart_ids: cart_items.iter().map(CartItem::id).collect(),
        }
    }

    fn allows(&self, product: &Product) -> bool {
        product.id != self.current_id && !self.cart_ids.contains(product.id.as_str())
    }
}

/// Runs only when the viewed product occupies one slot and the other is empty
fn strict_match<'c>(
    current_product: &Product,
    profile: &OutfitProfile<'_>,
    excluded: &Exclusions<'_>,
    catalog: &'c Catalog,
) -> Option<&'c Product> {
    let wanted = match current_product.category.slot() {
        Some(Slot::Bottom) if !profile.has_top => Slot::Top,
        Some(Slot::Top) if !profile.has_bottom => Slot::Bottom,
        _ => return None,
    };

    catalog.iter().find(|p| {
        p.category.slot() == Some(wanted)
            && !profile.categories.contains(&p.category)
            && excluded.allows(p)
            && matches_color_scheme(&p.color, profile.dominant_color)
            && (p.fit == profile.dominant_fit || p.fit == REGULAR_FIT)
    })
}

fn relaxed_match<'c>(
    profile: &OutfitProfile<'_>,
    excluded: &Exclusions<'_>,
    catalog: &'c Catalog,
) -> Option<&'c Product> {
    let wanted = profile.missing_slot()?;
    catalog
        .iter()
        .find(|p| p.category.slot() == Some(wanted) && excluded.allows(p))
}

/// Whether two colours can be worn together
///
/// Neutrals go with everything and identical colours always match. Only the
/// listed complementary pairs clash; everything else is allowed.
pub fn matches_color_scheme(a: &str, b: &str) -> bool {
    if NEUTRAL_COLORS.contains(&a) || NEUTRAL_COLORS.contains(&b) {
        return true;
    }

    if a == b {
        return true;
    }

    !CLASHING_PAIRS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// Style tags for the outfit plus the suggested piece, in the order
/// formal, casual, streetwear. Never empty: defaults to casual.
pub fn determine_style_tags(outfit: &[&Product], suggested: &Product) -> Vec<StyleTag> {
    let items = || outfit.iter().copied().chain(std::iter::once(suggested));

    let mut tags = Vec::new();
    if items().any(|p| p.category == Category::Shirt && p.fit == REGULAR_FIT) {
        tags.push(StyleTag::Formal);
    }
    if items().any(|p| matches!(p.category, Category::Tshirt | Category::Hoodie)) {
        tags.push(StyleTag::Casual);
    }
    if items().any(|p| p.fit == OVERSIZED_FIT) {
        tags.push(StyleTag::Streetwear);
    }
    if tags.is_empty() {
        tags.push(StyleTag::Casual);
    }

    tags
}

fn build_reason(suggested: &Product, profile: &OutfitProfile<'_>) -> String {
    format!(
        "This {} complements your outfit. The {} color pairs well with {}, and the {} fit matches your style.",
        suggested.name, suggested.color, profile.dominant_color, suggested.fit
    )
}
