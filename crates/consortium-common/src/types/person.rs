//! Person - per-period productivity record
//!
//! Persons are produced upstream once per scoring period and are read-only
//! here. The table keeps input order because rank ties are broken by it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ConsortiumError, Result};

/// A candidate team member and their productivity rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier
    pub id: String,
    /// Productivity rate (value per minute)
    pub score_per_min: f64,
}

impl Person {
    pub fn new(id: impl Into<String>, score_per_min: f64) -> Self {
        Self {
            id: id.into(),
            score_per_min,
        }
    }
}

/// Person scores in input order with id lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Person>", into = "Vec<Person>")]
pub struct PersonTable {
    persons: Vec<Person>,
    index: HashMap<String, usize>,
}

impl PersonTable {
    /// Build a table, rejecting duplicate ids and non-finite scores
    pub fn new(persons: Vec<Person>) -> Result<Self> {
        let mut index = HashMap::with_capacity(persons.len());
        for (pos, person) in persons.iter().enumerate() {
            if !person.score_per_min.is_finite() {
                return Err(ConsortiumError::invalid_input(format!(
                    "non-finite score_per_min for person {}",
                    person.id
                )));
            }
            if index.insert(person.id.clone(), pos).is_some() {
                return Err(ConsortiumError::invalid_input(format!(
                    "duplicate person id: {}",
                    person.id
                )));
            }
        }
        Ok(Self { persons, index })
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&pos| &self.persons[pos])
    }

    /// Score for `id`, or 0.0 when the person is unknown
    #[inline]
    pub fn score_of(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, |p| p.score_per_min)
    }

    /// Persons in input order
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Persons by descending score; equal scores keep input order
    pub fn ranked(&self) -> Vec<&Person> {
        let mut ranked: Vec<&Person> = self.persons.iter().collect();
        ranked.sort_by(|a, b| b.score_per_min.total_cmp(&a.score_per_min));
        ranked
    }
}

impl TryFrom<Vec<Person>> for PersonTable {
    type Error = ConsortiumError;

    fn try_from(persons: Vec<Person>) -> Result<Self> {
        Self::new(persons)
    }
}

impl From<PersonTable> for Vec<Person> {
    fn from(table: PersonTable) -> Self {
        table.persons
    }
}
