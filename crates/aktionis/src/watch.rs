use crate::types::Deal;

/// Looks for a brand in deal names using its two common casings.
#[derive(Debug, Clone)]
pub struct BrandWatch {
    capitalized: String,
    lowercase: String,
}

impl BrandWatch {
    /// `brand` keeps its own casing after the first char, which is upper-cased.
    pub fn new(brand: &str) -> Self {
        let brand = brand.trim();
        let lowercase = brand.to_lowercase();
        let mut chars = brand.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            capitalized,
            lowercase,
        }
    }

    /// Brand name as shown in the banner title.
    pub fn brand(&self) -> &str {
        &self.capitalized
    }

    pub fn matches(&self, deal: &Deal) -> bool {
        !self.lowercase.is_empty()
            && (deal.name.contains(&self.capitalized) || deal.name.contains(&self.lowercase))
    }

    /// First deal, in page order, naming the brand.
    pub fn find<'a>(&self, deals: &'a [Deal]) -> Option<&'a Deal> {
        deals.iter().find(|deal| self.matches(deal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(name: &str, store: &str) -> Deal {
        Deal {
            name: name.to_string(),
            store: store.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_both_casings() {
        let watch = BrandWatch::new("Anker");
        assert!(watch.matches(&deal("Anker PowerCore 3.2", "Digitec")));
        assert!(watch.matches(&deal("Kabel von anker", "Brack")));
    }

    #[test]
    fn test_other_casings_do_not_match() {
        let watch = BrandWatch::new("Anker");
        assert!(!watch.matches(&deal("ANKER Soundcore", "Fust")));
        assert!(!watch.matches(&deal("AnKer Nano", "Fust")));
    }

    #[test]
    fn test_brand_token_keeps_its_casing() {
        let watch = BrandWatch::new("TP-Link");
        assert_eq!(watch.brand(), "TP-Link");
        assert!(watch.matches(&deal("TP-Link Deco X50", "Digitec")));
        assert!(watch.matches(&deal("Mesh von tp-link", "Brack")));
        assert!(!watch.matches(&deal("Tp-link Archer", "Fust")));

        let watch = BrandWatch::new("anker");
        assert_eq!(watch.brand(), "Anker");
        assert!(watch.matches(&deal("Anker Nano", "Fust")));
    }

    #[test]
    fn test_first_match_wins() {
        let watch = BrandWatch::new("Anker");
        let deals = vec![
            deal("Sony WH-1000XM5", "Fust"),
            deal("Anker PowerCore 3.2", "Digitec"),
            deal("anker USB-C Kabel 2m", "Brack"),
        ];

        let found = watch.find(&deals).expect("Should find an Anker deal");
        assert_eq!(found.store, "Digitec");
    }

    #[test]
    fn test_no_match() {
        let watch = BrandWatch::new("Anker");
        let deals = vec![deal("Sony WH-1000XM5", "Fust")];
        assert!(watch.find(&deals).is_none());
        assert!(watch.find(&[]).is_none());
    }

    #[test]
    fn test_empty_brand_never_matches() {
        let watch = BrandWatch::new("");
        assert!(!watch.matches(&deal("Anker PowerCore 3.2", "Digitec")));
    }
}
