use chrono::{DateTime, Utc};

use gig_domain::tag::{Tag, TagKind};

/// Account owned by the gig service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a user. `email` must already be normalized and
/// `password_hash` already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// One value per tag kind.
///
/// Used as `TagSet<Vec<i32>>` for linked ids, `TagSet<Vec<Tag>>` for nested
/// detail output and `TagSet<Option<Vec<i32>>>` for partial updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet<T> {
    pub genres: T,
    pub themes: T,
    pub platforms: T,
    pub developers: T,
    pub publishers: T,
}

impl<T> TagSet<T> {
    pub fn get(&self, kind: TagKind) -> &T {
        match kind {
            TagKind::Genre => &self.genres,
            TagKind::Theme => &self.themes,
            TagKind::Platform => &self.platforms,
            TagKind::Developer => &self.developers,
            TagKind::Publisher => &self.publishers,
        }
    }

    pub fn get_mut(&mut self, kind: TagKind) -> &mut T {
        match kind {
            TagKind::Genre => &mut self.genres,
            TagKind::Theme => &mut self.themes,
            TagKind::Platform => &mut self.platforms,
            TagKind::Developer => &mut self.developers,
            TagKind::Publisher => &mut self.publishers,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagKind, &T)> {
        TagKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Game as shown in list responses: scalar fields plus linked tag ids.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: i32,
    pub name: String,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    pub first_release_date: Option<DateTime<Utc>>,
    pub tags: TagSet<Vec<i32>>,
}

/// Game with its summary text and the linked tags resolved to names.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub id: i32,
    pub name: String,
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    pub first_release_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: TagSet<Vec<Tag>>,
}

/// Full set of writable game fields (create and PUT).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameInput {
    pub name: String,
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub rating: f64,
    pub popularity: f64,
    pub first_release_date: Option<DateTime<Utc>>,
    pub tags: TagSet<Vec<i32>>,
}

/// Partial game update (PATCH). `None` leaves the field untouched; for the
/// nullable columns `Some(None)` clears the value. A supplied tag list
/// replaces the existing links of that kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamePatch {
    pub name: Option<String>,
    pub summary: Option<Option<String>>,
    pub cover: Option<Option<String>>,
    pub rating: Option<f64>,
    pub popularity: Option<f64>,
    pub first_release_date: Option<Option<DateTime<Utc>>>,
    pub tags: TagSet<Option<Vec<i32>>>,
}

impl GamePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.summary.is_none()
            && self.cover.is_none()
            && self.rating.is_none()
            && self.popularity.is_none()
            && self.first_release_date.is_none()
            && self.tags.iter().all(|(_, ids)| ids.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_tag_set_by_kind() {
        let mut set: TagSet<Vec<i32>> = TagSet::default();
        set.get_mut(TagKind::Developer).push(7);
        assert_eq!(set.developers, vec![7]);
        assert_eq!(set.get(TagKind::Developer), &vec![7]);
        assert!(set.get(TagKind::Genre).is_empty());
    }

    #[test]
    fn should_iterate_tag_set_in_kind_order() {
        let set = TagSet {
            genres: 1,
            themes: 2,
            platforms: 3,
            developers: 4,
            publishers: 5,
        };
        let kinds: Vec<_> = set.iter().map(|(kind, v)| (kind, *v)).collect();
        assert_eq!(
            kinds,
            vec![
                (TagKind::Genre, 1),
                (TagKind::Theme, 2),
                (TagKind::Platform, 3),
                (TagKind::Developer, 4),
                (TagKind::Publisher, 5),
            ]
        );
    }

    #[test]
    fn should_report_empty_patch() {
        assert!(GamePatch::default().is_empty());
        let patch = GamePatch {
            tags: TagSet {
                themes: Some(vec![]),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
