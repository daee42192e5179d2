// A described Pokemon, built fresh for each request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub description: String,
}

impl Pokemon {
    // Both fields must be non-empty; anything else counts as an absent entity.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() || description.is_empty() {
            return None;
        }

        Some(Self { name, description })
    }
}
