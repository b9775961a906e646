//! Keyboard activation for clickable cards

use super::view::ViewNode;

/// Keys that activate a focused card, as reported by `KeyboardEvent.key`
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Forward an activation key press on `card` to a click
pub fn activate_on_key<N: ViewNode>(card: &N, key: &str) -> bool {
    if is_activation_key(key) {
        card.click();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeNode;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
    }

    #[test]
    fn test_enter_clicks_card() {
        let card = FakeNode::new("div").with_class("service-card");
        assert!(activate_on_key(&card, "Enter"));
        assert!(!activate_on_key(&card, "a"));
        assert_eq!(card.clicks(), 1);
    }
}
