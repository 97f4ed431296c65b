//! Draft editing operations used by the admin surface.
//!
//! Every operation mutates a draft in place; the draft only reaches the shared
//! configuration when the caller saves or publishes it wholesale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::defaults::ymd;
use super::{current_timestamp_ms, Faq, Hero, Review, SiteConfig, SocialLink, Stat, Vehicle};
use crate::error::ConfigError;

/// Entities that carry an id unique within their sequence.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_identified!(Stat, Vehicle, SocialLink, Review, Faq);

/// Timestamp-derived id, bumped past any id already taken in `existing`.
pub fn next_entity_id<T: Identified>(existing: &[T]) -> String {
    let mut candidate = current_timestamp_ms();
    while existing.iter().any(|item| item.id() == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

fn remove_by_id<T: Identified>(
    items: &mut Vec<T>,
    id: &str,
    collection: &str,
) -> Result<T, ConfigError> {
    let index = items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| ConfigError::entry_not_found(collection, id))?;
    Ok(items.remove(index))
}

fn find_mut<'a, T: Identified>(
    items: &'a mut [T],
    id: &str,
    collection: &str,
) -> Result<&'a mut T, ConfigError> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| ConfigError::entry_not_found(collection, id))
}

/// Partial vehicle update (price settings form).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VehiclePatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub base: Option<u32>,
    pub km: Option<u32>,
    pub hour: Option<u32>,
    pub full_day: Option<u32>,
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReviewPatch {
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// Contact details and areas ("general" tab). Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralPatch {
    pub phones: Option<Vec<String>>,
    pub secondary_phone: Option<String>,
    pub emails: Option<Vec<String>>,
    pub address: Option<String>,
    pub service_areas: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl SiteConfig {
    pub fn set_hero(&mut self, hero: Hero) {
        self.hero = hero;
    }

    pub fn apply_general(&mut self, patch: GeneralPatch) {
        if let Some(phones) = patch.phones {
            self.phones = phones;
        }
        if let Some(secondary) = patch.secondary_phone {
            self.secondary_phone = Some(secondary).filter(|s| !s.trim().is_empty());
        }
        if let Some(emails) = patch.emails {
            self.emails = emails;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(areas) = patch.service_areas {
            self.service_areas = areas;
        }
        if let Some(links) = patch.social_links {
            self.social_links = links;
        }
    }

    // ---- stats ----

    pub fn add_stat(&mut self, value: impl Into<String>, label: impl Into<String>) -> &Stat {
        let id = next_entity_id(&self.stats);
        self.stats.push(Stat { id, value: value.into(), label: label.into() });
        &self.stats[self.stats.len() - 1]
    }

    pub fn remove_stat(&mut self, id: &str) -> Result<Stat, ConfigError> {
        remove_by_id(&mut self.stats, id, "stats")
    }

    // ---- vehicles ----

    /// Append a vehicle under a freshly generated id (any id on the input is replaced).
    pub fn add_vehicle(&mut self, mut vehicle: Vehicle) -> &Vehicle {
        vehicle.id = next_entity_id(&self.vehicles);
        self.vehicles.push(vehicle);
        &self.vehicles[self.vehicles.len() - 1]
    }

    pub fn update_vehicle(&mut self, id: &str, patch: VehiclePatch) -> Result<&Vehicle, ConfigError> {
        let vehicle = find_mut(&mut self.vehicles, id, "vehicles")?;
        if let Some(name) = patch.name {
            vehicle.name = name;
        }
        if let Some(icon) = patch.icon {
            vehicle.icon = icon;
        }
        if let Some(base) = patch.base {
            vehicle.base = base;
        }
        if let Some(km) = patch.km {
            vehicle.km = km;
        }
        if let Some(hour) = patch.hour {
            vehicle.hour = hour;
        }
        if let Some(full_day) = patch.full_day {
            vehicle.full_day = full_day;
        }
        if let Some(capacity) = patch.capacity {
            vehicle.capacity = capacity;
        }
        Ok(vehicle)
    }

    pub fn remove_vehicle(&mut self, id: &str) -> Result<Vehicle, ConfigError> {
        remove_by_id(&mut self.vehicles, id, "vehicles")
    }

    // ---- gallery ----

    pub fn add_gallery_images<I>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.gallery.len();
        self.gallery.extend(images);
        self.gallery.len() - before
    }

    pub fn remove_gallery_image(&mut self, index: usize) -> Result<String, ConfigError> {
        if index >= self.gallery.len() {
            return Err(ConfigError::GalleryIndexOutOfRange { index, len: self.gallery.len() });
        }
        Ok(self.gallery.remove(index))
    }

    // ---- reviews ----

    /// Append the placeholder review the admin form starts from.
    pub fn add_default_review(&mut self) -> &Review {
        let id = next_entity_id(&self.reviews);
        self.reviews.push(Review {
            id,
            name: "New Client".to_string(),
            rating: 5,
            comment: "Great service!".to_string(),
            date: ymd(2024, 1, 1),
        });
        &self.reviews[self.reviews.len() - 1]
    }

    pub fn update_review(&mut self, id: &str, patch: ReviewPatch) -> Result<&Review, ConfigError> {
        let review = find_mut(&mut self.reviews, id, "reviews")?;
        if let Some(name) = patch.name {
            review.name = name;
        }
        if let Some(rating) = patch.rating {
            review.rating = rating;
        }
        if let Some(comment) = patch.comment {
            review.comment = comment;
        }
        if let Some(date) = patch.date {
            review.date = date;
        }
        Ok(review)
    }

    /// Remove the review with `id`, keeping the order of the rest.
    pub fn remove_review(&mut self, id: &str) -> Result<Review, ConfigError> {
        remove_by_id(&mut self.reviews, id, "reviews")
    }

    // ---- faqs ----

    pub fn add_faq(&mut self, question: impl Into<String>, answer: impl Into<String>) -> &Faq {
        let id = next_entity_id(&self.faqs);
        self.faqs.push(Faq { id, question: question.into(), answer: answer.into() });
        &self.faqs[self.faqs.len() - 1]
    }

    pub fn update_faq(&mut self, id: &str, patch: FaqPatch) -> Result<&Faq, ConfigError> {
        let faq = find_mut(&mut self.faqs, id, "faqs")?;
        if let Some(question) = patch.question {
            faq.question = question;
        }
        if let Some(answer) = patch.answer {
            faq.answer = answer;
        }
        Ok(faq)
    }

    pub fn remove_faq(&mut self, id: &str) -> Result<Faq, ConfigError> {
        remove_by_id(&mut self.faqs, id, "faqs")
    }

    // ---- social links ----

    pub fn add_social_link(&mut self, platform: impl Into<String>, url: impl Into<String>) -> &SocialLink {
        let id = next_entity_id(&self.social_links);
        self.social_links.push(SocialLink { id, platform: platform.into(), url: url.into() });
        &self.social_links[self.social_links.len() - 1]
    }

    pub fn remove_social_link(&mut self, id: &str) -> Result<SocialLink, ConfigError> {
        remove_by_id(&mut self.social_links, id, "socialLinks")
    }
}
