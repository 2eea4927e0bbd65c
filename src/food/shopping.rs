use crate::config::DEFAULT_SHOPPING_SEARCH_URL;

/// Builds shopping-site search links for meal names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    search_url: String,
}

impl LinkBuilder {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    /// Spaces are stripped from `name`; nothing else is escaped, so names
    /// containing `&`, `#` or `?` produce links the site may misread.
    pub fn build_link(&self, name: &str) -> String {
        format!("{}?component=&q={}", self.search_url, name.replace(' ', ""))
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SHOPPING_SEARCH_URL)
    }
}

/// [`LinkBuilder::build_link`] against the default shopping site.
pub fn build_link(name: &str) -> String {
    LinkBuilder::default().build_link(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_spaces_removed() {
        assert_eq!(
            build_link("오트밀 죽"),
            "https://www.coupang.com/np/search?component=&q=오트밀죽"
        );
    }

    #[test]
    fn test_same_name_same_link() {
        let builder = LinkBuilder::new("http://shop.local/np/search");
        let first = builder.build_link("닭가슴살 샐러드");
        assert_eq!(first, builder.build_link("닭가슴살 샐러드"));
        assert_eq!(first, "http://shop.local/np/search?component=&q=닭가슴살샐러드");
    }

    #[test]
    fn test_reserved_characters_pass_through() {
        assert_eq!(
            build_link("햄&치즈 샌드위치"),
            "https://www.coupang.com/np/search?component=&q=햄&치즈샌드위치"
        );
    }
}
