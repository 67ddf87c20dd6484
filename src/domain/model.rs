use serde::{Deserialize, Serialize};

pub type BreedId = i64;
pub type DogId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub breed: BreedId,
}

impl Dog {
    pub fn new(id: DogId, name: impl Into<String>, breed: BreedId) -> Self {
        Self {
            id,
            name: name.into(),
            breed,
        }
    }
}

/// A breed and the dogs linked to it, in the order they were fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breed {
    pub id: BreedId,
    pub name: String,
    dogs: Vec<Dog>,
}

impl Breed {
    pub fn new(id: BreedId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dogs: Vec::new(),
        }
    }

    pub fn add_dog(&mut self, dog: Dog) {
        self.dogs.push(dog);
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn dogs_count(&self) -> usize {
        self.dogs.len()
    }
}

/// One page of a paginated listing.
///
/// `count` is only reported by some endpoints, `next` is absent or null on
/// the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreedRecord {
    pub id: BreedId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DogRecord {
    pub id: DogId,
    pub name: String,
    #[serde(default)]
    pub breed: Option<BreedId>,
}

/// Summary posted to the answer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub total_breeds: usize,
    pub total_dogs: usize,
    pub common_breed: String,
    pub common_dog_name: String,
}
