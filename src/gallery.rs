//! The artwork collection: a fixed, ordered, non-empty list.
//!
//! Ordering defines the cycling order of the carousel and never changes
//! after construction.

use thiserror::Error;

/// Errors that can occur when assembling a gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid configuration: a gallery needs at least one artwork")]
    Empty,
}

/// Opaque key into the rendering layer's asset table.
///
/// The gallery never knows how images are stored; the viewer resolves the
/// key to whatever rendition it can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub fn key(&self) -> &'static str {
        self.0
    }
}

/// One displayable record. `year` is free-form text, not a number: the
/// source material includes entries like "c. 1503".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub image: ImageRef,
    pub title: &'static str,
    pub artist: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Builds a gallery, rejecting an empty list. Every other operation
    /// relies on there being at least one artwork.
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, GalleryError> {
        if artworks.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { artworks })
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Lookup by carousel index. Indices wrap, so any value is valid; the
    /// carousel keeps its index in range regardless.
    pub fn get(&self, index: usize) -> &Artwork {
        &self.artworks[index % self.artworks.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }
}

/// The built-in exhibition.
pub fn builtin() -> Vec<Artwork> {
    vec![
        Artwork {
            image: ImageRef("starry-night"),
            title: "The Starry Night",
            artist: "Vincent van Gogh",
            year: "1889",
        },
        Artwork {
            image: ImageRef("the-scream"),
            title: "The Scream",
            artist: "Edvard Munch",
            year: "1893",
        },
        Artwork {
            image: ImageRef("persistence-of-memory"),
            title: "The Persistence of Memory",
            artist: "Salvador Dalí",
            year: "1931",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_is_rejected() {
        let result = Gallery::new(Vec::new());
        assert!(matches!(result, Err(GalleryError::Empty)));
    }

    #[test]
    fn builtin_gallery_has_three_artworks_in_order() {
        let gallery = Gallery::new(builtin()).unwrap();
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).title, "The Starry Night");
        assert_eq!(gallery.get(1).title, "The Scream");
        assert_eq!(gallery.get(2).title, "The Persistence of Memory");
    }

    #[test]
    fn single_artwork_gallery_is_accepted() {
        let artwork = builtin().remove(0);
        let gallery = Gallery::new(vec![artwork.clone()]).unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.get(0), &artwork);
    }

    #[test]
    fn lookup_wraps_out_of_range_indices() {
        let gallery = Gallery::new(builtin()).unwrap();
        assert_eq!(gallery.get(3), gallery.get(0));
        assert_eq!(gallery.get(7), gallery.get(1));
    }

    #[test]
    fn image_keys_are_distinct() {
        let artworks = builtin();
        let keys: Vec<_> = artworks.iter().map(|a| a.image.key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.windows(2).all(|pair| pair[0] != pair[1]));
    }
}
