//! Static site content: hero videos and the project portfolio.

use crate::carousel::MediaItem;
use crate::models::Project;

/// Hero carousel videos, in display order.
pub fn hero_media() -> Vec<MediaItem> {
    vec![
        MediaItem::new("/videos/hero-2.mp4", "Renderra architectural visualization 1"),
        MediaItem::new("/videos/hero-1.mp4", "Renderra architectural visualization 2"),
        MediaItem::new("/videos/hero-3.mp4", "Renderra architectural visualization 3"),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "nordic-loft".into(),
            title: "Nordic Loft".into(),
            short_description: "Warm minimalist living space with natural materials".into(),
            description: "Nordic Loft embodies the perfect balance between modern minimalism \
                and cozy comfort. This interior visualization showcases a thoughtfully designed \
                living space that celebrates natural materials and warm textures. The design \
                features rich wooden built-in shelving, comfortable seating arrangements, and \
                carefully curated greenery that brings life to the space. Soft, ambient lighting \
                creates an inviting atmosphere while the neutral color palette of warm browns, \
                soft grays, and natural wood tones establishes a sense of calm and \
                sophistication. The space demonstrates how contemporary design can feel both \
                stylish and lived-in, creating an environment that's perfect for both relaxation \
                and entertaining."
                .into(),
            thumbnail: "/images/projects/nordic-loft-1.jpg".into(),
            main_image: Some("/images/projects/nordic-loft-1.jpg".into()),
            gallery: vec![
                "/images/projects/nordic-loft-2.jpg".into(),
                "/images/projects/nordic-loft-3.jpg".into(),
            ],
            client: "Private Residence".into(),
            location: "Oslo, Norway".into(),
            year: "2024".into(),
            kind: "Residential Interior".into(),
            architect: None,
            features: Vec::new(),
        },
        Project {
            id: "glass-library".into(),
            title: "Glass Library".into(),
            short_description: "Contemplative reading space with dramatic natural lighting".into(),
            description: "Glass Library represents a masterful integration of architecture and \
                nature, creating a contemplative sanctuary for reading and reflection. This \
                visualization showcases a sophisticated library space where floor-to-ceiling \
                grid windows create a striking geometric framework that filters natural light \
                into beautiful shadow patterns throughout the interior. The design features rich \
                dark wood built-in shelving that spans the walls, complemented by a dramatic \
                linear ceiling treatment that adds depth and rhythm to the space. Comfortable \
                neutral-toned seating is anchored by a stunning live-edge wood coffee table, \
                creating an intimate reading nook. The seamless connection between the interior \
                library and the lush garden beyond establishes a serene dialogue between built \
                and natural environments, making this space a perfect retreat for contemplation \
                and study."
                .into(),
            thumbnail: "/images/projects/glass-library-1.jpg".into(),
            main_image: Some("/images/projects/glass-library-1.jpg".into()),
            gallery: vec![
                "/images/projects/glass-library-2.jpg".into(),
                "/images/projects/glass-library-3.jpg".into(),
            ],
            client: "Private Residence".into(),
            location: "Kyoto, Japan".into(),
            year: "2024".into(),
            kind: "Library Design".into(),
            architect: None,
            features: Vec::new(),
        },
        Project {
            id: "urban-kitchen".into(),
            title: "Urban Kitchen".into(),
            short_description: "Contemporary culinary space with sophisticated materials".into(),
            description: "Urban Kitchen represents the pinnacle of modern culinary design, where \
                functionality meets refined aesthetics. This visualization showcases a \
                meticulously crafted kitchen that balances warm natural wood cabinetry with \
                striking dark countertops and backsplash elements. The design emphasizes clean \
                geometric lines and thoughtful material contrasts, creating a space that feels \
                both professional and inviting. Strategic pendant lighting illuminates the \
                central island, which serves as both a workspace and social hub. The \
                sophisticated color palette of blonde wood, deep blue-gray surfaces, and matte \
                black accents creates a timeless yet contemporary atmosphere that elevates the \
                everyday act of cooking into a luxurious experience."
                .into(),
            thumbnail: "/images/projects/urban-kitchen-1.jpg".into(),
            main_image: Some("/images/projects/urban-kitchen-1.jpg".into()),
            gallery: vec![
                "/images/projects/urban-kitchen-2.jpg".into(),
                "/images/projects/urban-kitchen-3.jpg".into(),
            ],
            client: "Private Residence".into(),
            location: "Berlin, Germany".into(),
            year: "2025".into(),
            kind: "Kitchen Design".into(),
            architect: None,
            features: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hero_has_three_slides_with_distinct_sources() {
        let media = hero_media();
        assert_eq!(media.len(), 3);
        let sources: HashSet<_> = media.iter().map(|m| m.source_ref.as_str()).collect();
        assert_eq!(sources.len(), media.len());
    }

    #[test]
    fn project_ids_are_unique_and_content_is_filled_in() {
        let projects = projects();
        assert!(!projects.is_empty());
        let ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());
        for p in &projects {
            assert!(!p.title.is_empty(), "{}", p.id);
            assert!(!p.description.is_empty(), "{}", p.id);
            assert!(!p.thumbnail.is_empty(), "{}", p.id);
            assert!(!p.all_images().is_empty(), "{}", p.id);
        }
    }
}
