/// One portfolio entry. Static content, defined in `data.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub thumbnail: String,
    pub main_image: Option<String>,
    pub gallery: Vec<String>,
    pub client: String,
    pub location: String,
    pub year: String,
    pub kind: String,
    pub architect: Option<String>,
    pub features: Vec<String>,
}

impl Project {
    /// Main image followed by the gallery, for the overlay's image column.
    pub fn all_images(&self) -> Vec<String> {
        let mut images = vec![self
            .main_image
            .clone()
            .unwrap_or_else(|| self.thumbnail.clone())];
        images.extend(self.gallery.iter().cloned());
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(main_image: Option<&str>) -> Project {
        Project {
            id: "test".into(),
            title: "Test".into(),
            short_description: String::new(),
            description: String::new(),
            thumbnail: "/images/thumb.jpg".into(),
            main_image: main_image.map(Into::into),
            gallery: vec!["/images/a.jpg".into(), "/images/b.jpg".into()],
            client: String::new(),
            location: String::new(),
            year: String::new(),
            kind: String::new(),
            architect: None,
            features: Vec::new(),
        }
    }

    #[test]
    fn all_images_prefers_main_image() {
        let images = project(Some("/images/main.jpg")).all_images();
        assert_eq!(images[0], "/images/main.jpg");
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn all_images_falls_back_to_thumbnail() {
        let images = project(None).all_images();
        assert_eq!(images[0], "/images/thumb.jpg");
    }
}
