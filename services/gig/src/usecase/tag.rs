use gig_domain::tag::{Tag, TagKind};

use crate::domain::repository::TagRepository;
use crate::error::GigServiceError;

// ── ListTags ─────────────────────────────────────────────────────────────────

pub struct ListTagsUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> ListTagsUseCase<R> {
    pub async fn execute(
        &self,
        kind: TagKind,
        assigned_only: bool,
    ) -> Result<Vec<Tag>, GigServiceError> {
        self.repo.list(kind, assigned_only).await
    }
}

/// Fail with `UnknownTag` on the first id in `ids` that has no `kind` row.
pub async fn ensure_tags_exist<R: TagRepository>(
    repo: &R,
    kind: TagKind,
    ids: &[i32],
) -> Result<(), GigServiceError> {
    if ids.is_empty() {
        return Ok(());
    }
    let existing = repo.existing_ids(kind, ids).await?;
    match ids.iter().find(|id| !existing.contains(id)) {
        Some(&id) => Err(GigServiceError::UnknownTag { kind, id }),
        None => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory tag tables; `assigned` holds the ids linked to some game.
    pub(crate) struct MockTagRepo {
        pub tags: Vec<(TagKind, Tag)>,
        pub assigned: Vec<(TagKind, i32)>,
    }

    impl MockTagRepo {
        pub(crate) fn new(tags: Vec<(TagKind, i32, &str)>) -> Self {
            Self {
                tags: tags
                    .into_iter()
                    .map(|(kind, id, name)| {
                        (
                            kind,
                            Tag {
                                id,
                                name: name.to_owned(),
                            },
                        )
                    })
                    .collect(),
                assigned: vec![],
            }
        }
    }

    impl TagRepository for MockTagRepo {
        async fn list(
            &self,
            kind: TagKind,
            assigned_only: bool,
        ) -> Result<Vec<Tag>, GigServiceError> {
            let mut tags: Vec<Tag> = self
                .tags
                .iter()
                .filter(|(k, t)| {
                    *k == kind && (!assigned_only || self.assigned.contains(&(kind, t.id)))
                })
                .map(|(_, t)| t.clone())
                .collect();
            tags.sort_by(|a, b| b.name.cmp(&a.name));
            Ok(tags)
        }

        async fn existing_ids(
            &self,
            kind: TagKind,
            ids: &[i32],
        ) -> Result<Vec<i32>, GigServiceError> {
            Ok(self
                .tags
                .iter()
                .filter(|(k, t)| *k == kind && ids.contains(&t.id))
                .map(|(_, t)| t.id)
                .collect())
        }
    }

    fn repo() -> MockTagRepo {
        let mut repo = MockTagRepo::new(vec![
            (TagKind::Genre, 1, "Adventure"),
            (TagKind::Genre, 2, "Puzzle"),
            (TagKind::Genre, 3, "Racing"),
            (TagKind::Platform, 1, "Android"),
        ]);
        repo.assigned = vec![(TagKind::Genre, 1), (TagKind::Genre, 3)];
        repo
    }

    #[tokio::test]
    async fn should_list_tags_of_kind_by_name_desc() {
        let uc = ListTagsUseCase { repo: repo() };
        let names: Vec<_> = uc
            .execute(TagKind::Genre, false)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Racing", "Puzzle", "Adventure"]);
    }

    #[tokio::test]
    async fn should_list_only_assigned_tags() {
        let uc = ListTagsUseCase { repo: repo() };
        let ids: Vec<_> = uc
            .execute(TagKind::Genre, true)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn should_accept_known_tag_ids() {
        assert!(ensure_tags_exist(&repo(), TagKind::Genre, &[1, 2]).await.is_ok());
        assert!(ensure_tags_exist(&repo(), TagKind::Theme, &[]).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unknown_tag_id() {
        let result = ensure_tags_exist(&repo(), TagKind::Platform, &[1, 9]).await;
        assert!(matches!(
            result,
            Err(GigServiceError::UnknownTag {
                kind: TagKind::Platform,
                id: 9
            })
        ));
    }
}
