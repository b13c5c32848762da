//! Fixed-capacity in-memory storage

use super::Storage;
use crate::model::Resume;
use crate::{Error, Result};

/// Default number of slots
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Array-backed storage for resumes.
///
/// Occupied slots always form the prefix `slots[..size]`. Lookups are a
/// linear scan over that prefix, so this backend suits small data sets.
#[derive(Debug)]
pub struct ArrayStorage {
    slots: Box<[Option<Resume>]>,
    size: usize,
}

impl ArrayStorage {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index_of(&self, uuid: &str) -> Option<usize> {
        self.slots[..self.size]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|r| r.uuid() == uuid))
    }

    fn occupied(&self) -> impl Iterator<Item = &Resume> {
        self.slots[..self.size].iter().flatten()
    }
}

impl Default for ArrayStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for ArrayStorage {
    fn clear(&mut self) -> Result<()> {
        self.slots[..self.size].fill(None);
        self.size = 0;
        Ok(())
    }

    fn save(&mut self, resume: &Resume) -> Result<()> {
        resume.validate()?;
        if self.index_of(resume.uuid()).is_some() {
            return Err(Error::AlreadyExists(resume.uuid().to_string()));
        }
        if self.size == self.slots.len() {
            return Err(Error::StorageFull(self.slots.len()));
        }

        self.slots[self.size] = Some(resume.clone());
        self.size += 1;
        tracing::debug!("Saved resume {} in slot {}", resume.uuid(), self.size - 1);
        Ok(())
    }

    fn get(&self, uuid: &str) -> Result<Resume> {
        self.index_of(uuid)
            .and_then(|i| self.slots[i].clone())
            .ok_or_else(|| Error::NotFound(uuid.to_string()))
    }

    fn update(&mut self, resume: &Resume) -> Result<()> {
        resume.validate()?;
        let i = self
            .index_of(resume.uuid())
            .ok_or_else(|| Error::NotFound(resume.uuid().to_string()))?;
        self.slots[i] = Some(resume.clone());
        Ok(())
    }

    fn delete(&mut self, uuid: &str) -> Result<()> {
        let i = self
            .index_of(uuid)
            .ok_or_else(|| Error::NotFound(uuid.to_string()))?;

        // Move the last occupied slot into the hole
        self.size -= 1;
        self.slots.swap(i, self.size);
        self.slots[self.size] = None;
        tracing::debug!("Deleted resume {} from slot {}", uuid, i);
        Ok(())
    }

    fn get_all_sorted(&self) -> Result<Vec<Resume>> {
        let mut all: Vec<Resume> = self.occupied().cloned().collect();
        all.sort_by(Resume::cmp_by_name);
        Ok(all)
    }

    fn size(&self) -> Result<usize> {
        Ok(self.size)
    }
}
