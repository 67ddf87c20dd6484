use crate::core::endpoints::{Endpoints, MAX_PAGE_SIZE};
use crate::core::pagination::{decode_page, Paginator};
use crate::core::stats::{first_max_by_key, most_common};
use crate::core::{Answer, Breed, BreedId, BreedRecord, Dog, DogId, DogRecord, Page, Transport};
use crate::utils::error::{DogHouseError, Result};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// What happened to a dog record offered to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DogPlacement {
    Linked,
    UnknownBreed,
    Duplicate,
}

/// In-memory aggregate of breeds and the dogs linked to them.
///
/// Breeds must be fully loaded before dogs: a dog is kept only when its
/// breed is already known.
#[derive(Debug, Default)]
pub struct DogHouse {
    breeds: Vec<Breed>,
    breed_positions: HashMap<BreedId, usize>,
    dogs: Vec<Dog>,
    dog_ids: HashSet<DogId>,
}

impl DogHouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn breed(&self, id: BreedId) -> Option<&Breed> {
        self.breed_positions.get(&id).map(|&pos| &self.breeds[pos])
    }

    /// Adds a breed; returns `false` when a breed with the same id exists.
    pub fn add_breed(&mut self, breed: Breed) -> bool {
        if self.breed_positions.contains_key(&breed.id) {
            return false;
        }
        self.breed_positions.insert(breed.id, self.breeds.len());
        self.breeds.push(breed);
        true
    }

    pub fn add_dog(&mut self, record: DogRecord) -> DogPlacement {
        let Some(&pos) = record
            .breed
            .and_then(|breed_id| self.breed_positions.get(&breed_id))
        else {
            return DogPlacement::UnknownBreed;
        };
        if !self.dog_ids.insert(record.id) {
            return DogPlacement::Duplicate;
        }

        let breed = &mut self.breeds[pos];
        let dog = Dog::new(record.id, record.name, breed.id);
        breed.add_dog(dog.clone());
        self.dogs.push(dog);
        DogPlacement::Linked
    }

    /// Loads breeds, then dogs.
    pub async fn get_data<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        endpoints: &Endpoints,
        token: &str,
    ) -> Result<()> {
        self.load_breeds(transport, endpoints, token).await?;
        self.load_dogs(transport, endpoints, token).await?;
        Ok(())
    }

    /// Probes the breed count, then walks the listing with a page size of at
    /// most [`MAX_PAGE_SIZE`]. Returns the number of breeds added.
    pub async fn load_breeds<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        endpoints: &Endpoints,
        token: &str,
    ) -> Result<usize> {
        let probe_url = endpoints.breeds(1);
        tracing::debug!("Probing breed count at {}", probe_url);
        let probe: Page<BreedRecord> = decode_page(&probe_url, transport.get(&probe_url, token).await?)?;

        let reported = probe.count.unwrap_or(0);
        let page_size = reported.min(MAX_PAGE_SIZE);
        if page_size == 0 {
            tracing::info!("API reports no breeds, skipping breed listing");
            return Ok(0);
        }

        let mut pages = Paginator::new(transport, endpoints.breeds(page_size), token);
        let mut added = 0;
        while let Some(page) = pages.next_page::<BreedRecord>().await? {
            for record in page.results {
                let id = record.id;
                if self.add_breed(Breed::new(record.id, record.name)) {
                    added += 1;
                } else {
                    tracing::warn!("Skipping duplicate breed id {}", id);
                }
            }
        }

        tracing::info!(
            "Loaded {} breeds in {} pages (API reported {})",
            added,
            pages.pages_fetched(),
            reported
        );
        Ok(added)
    }

    /// Walks the dog listing and links each dog to its breed. Dogs whose
    /// breed is unknown are dropped. Returns the number of dogs linked.
    pub async fn load_dogs<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        endpoints: &Endpoints,
        token: &str,
    ) -> Result<usize> {
        let mut pages = Paginator::new(transport, endpoints.dogs(), token);
        let mut linked = 0;
        let mut dropped = 0;

        while let Some(page) = pages.next_page::<DogRecord>().await? {
            for record in page.results {
                let id = record.id;
                match self.add_dog(record) {
                    DogPlacement::Linked => linked += 1,
                    DogPlacement::UnknownBreed => {
                        tracing::debug!("Dropping dog {}: breed not loaded", id);
                        dropped += 1;
                    }
                    DogPlacement::Duplicate => {
                        tracing::warn!("Skipping duplicate dog id {}", id);
                    }
                }
            }
        }

        tracing::info!(
            "Loaded {} dogs in {} pages ({} dropped without a known breed)",
            linked,
            pages.pages_fetched(),
            dropped
        );
        Ok(linked)
    }

    pub fn total_breeds(&self) -> usize {
        self.breeds.len()
    }

    pub fn total_dogs(&self) -> usize {
        self.dogs.len()
    }

    /// Breed with the most dogs; the first loaded breed wins a tie.
    pub fn common_breed(&self) -> Option<&Breed> {
        first_max_by_key(&self.breeds, |breed| breed.dogs_count())
    }

    /// Most frequent dog name, or `""` when no dogs are loaded.
    pub fn common_dog_name(&self) -> &str {
        most_common(self.dogs.iter().map(|dog| dog.name.as_str()))
            .map(|(name, _)| name)
            .unwrap_or("")
    }

    pub fn answer(&self) -> Result<Answer> {
        let common_breed = self.common_breed().ok_or(DogHouseError::NoBreedData)?;

        Ok(Answer {
            total_breeds: self.total_breeds(),
            total_dogs: self.total_dogs(),
            common_breed: common_breed.name.clone(),
            common_dog_name: self.common_dog_name().to_string(),
        })
    }

    /// Posts the computed answer and returns the raw response.
    pub async fn send_data<T: Transport + ?Sized>(
        &self,
        transport: &T,
        endpoints: &Endpoints,
        token: &str,
    ) -> Result<Value> {
        let payload = serde_json::to_value(self.answer()?)?;
        let url = endpoints.answer();

        tracing::debug!("Submitting answer to {}: {}", url, payload);
        let response = transport.post(&url, &payload, token).await?;
        tracing::info!("Answer response: {}", response);

        Ok(response)
    }
}
