// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_polish_diacritics() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Wzory Dokumentów"), "wzory-dokumentow");
        assert_eq!(
            slugger.slugify("Zgłoszenie naruszeń prawa"),
            "zgloszenie-naruszen-prawa"
        );
    }
}
