/// Size variants understood by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn token(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

/// Resolves partial image paths against the image base URL.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `None` when the record has no image.
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.filter(|p| !p.is_empty())?;
        let separator = if path.starts_with('/') { "" } else { "/" };
        Some(format!(
            "{}/{}{}{}",
            self.base_url,
            size.token(),
            separator,
            path
        ))
    }

    pub fn poster_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::W500)
    }

    pub fn backdrop_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::W780)
    }

    pub fn profile_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url(path, ImageSize::W500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sized_urls() {
        let urls = ImageUrls::new("https://image.tmdb.org/t/p/");
        assert_eq!(
            urls.poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            urls.backdrop_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w780/abc.jpg")
        );
        assert_eq!(
            urls.image_url(Some("abc.jpg"), ImageSize::Original).as_deref(),
            Some("https://image.tmdb.org/t/p/original/abc.jpg")
        );
    }

    #[test]
    fn missing_path_has_no_url() {
        let urls = ImageUrls::new("https://image.tmdb.org/t/p");
        assert_eq!(urls.poster_url(None), None);
        assert_eq!(urls.profile_url(Some("")), None);
    }
}
