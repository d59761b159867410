use vodca::{AsRefln, Fromln};

/// Location of the cover image, stored as given.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookImage(String);

impl BookImage {
    pub fn new(image: impl Into<String>) -> Self {
        Self(image.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookDescription(String);

impl BookDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
