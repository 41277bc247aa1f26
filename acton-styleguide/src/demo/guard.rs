//! Check-then-act guard around demo content creation

use std::sync::Arc;

use super::{ContentGenerator, DemoContentKind, DemoError, RecordFinder};

/// Observed state of a demo content set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    /// Nothing of the set is stored
    Absent,
    /// The set has been generated
    Present,
}

/// Why a guarded request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The set exists already and has to be deleted first
    AlreadyExists,
}

/// Result of a guarded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request was carried out
    Ok,
    /// The request was refused without side effects
    Failed(FailureReason),
}

impl Outcome {
    /// Whether the request was carried out
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// One demo content set, recomputed from stored records on every use
///
/// The set has no identity of its own: [`exists`](Self::exists) counts the
/// records matching the set's criteria each time it is called.
pub struct DemoContentSet<'a> {
    kind: DemoContentKind,
    finder: &'a dyn RecordFinder,
    generator: &'a dyn ContentGenerator,
}

impl<'a> DemoContentSet<'a> {
    /// Build a set from its collaborators
    #[must_use]
    pub fn new(
        kind: DemoContentKind,
        finder: &'a dyn RecordFinder,
        generator: &'a dyn ContentGenerator,
    ) -> Self {
        Self {
            kind,
            finder,
            generator,
        }
    }

    /// Which set this is
    #[must_use]
    pub const fn kind(&self) -> DemoContentKind {
        self.kind
    }

    /// Number of stored pages that mark this set as present
    pub async fn count(&self) -> Result<usize, DemoError> {
        let uids = match self.kind {
            DemoContentKind::Tca => self.finder.find_uids_of_styleguide_entry_pages().await?,
            DemoContentKind::Frontend => self.finder.find_uids_of_frontend_pages().await?,
        };
        Ok(uids.len())
    }

    /// Whether any record of this set is stored
    pub async fn exists(&self) -> Result<bool, DemoError> {
        Ok(self.count().await? > 0)
    }

    /// Current state derived from [`exists`](Self::exists)
    pub async fn state(&self) -> Result<ContentState, DemoError> {
        Ok(if self.exists().await? {
            ContentState::Present
        } else {
            ContentState::Absent
        })
    }

    /// Generate the set without any check
    pub async fn create(&self) -> Result<(), DemoError> {
        self.generator.create().await
    }

    /// Remove the set without any check
    pub async fn delete(&self) -> Result<(), DemoError> {
        self.generator.delete().await
    }
}

/// Refuses to create demo content that already exists
///
/// The check and the creation are two separate storage round trips. Two
/// concurrent create requests can both observe [`ContentState::Absent`] and
/// both generate the set, leaving duplicated content behind. Closing that
/// window needs a uniqueness constraint or lock in storage and is not
/// attempted here.
#[derive(Clone)]
pub struct ExistenceGuard {
    finder: Arc<dyn RecordFinder>,
    tca_generator: Arc<dyn ContentGenerator>,
    frontend_generator: Arc<dyn ContentGenerator>,
}

impl ExistenceGuard {
    /// Create a guard over the given collaborators
    #[must_use]
    pub fn new(
        finder: Arc<dyn RecordFinder>,
        tca_generator: Arc<dyn ContentGenerator>,
        frontend_generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            finder,
            tca_generator,
            frontend_generator,
        }
    }

    /// The demo content set of the given kind
    #[must_use]
    pub fn set(&self, kind: DemoContentKind) -> DemoContentSet<'_> {
        let generator = match kind {
            DemoContentKind::Tca => self.tca_generator.as_ref(),
            DemoContentKind::Frontend => self.frontend_generator.as_ref(),
        };
        DemoContentSet::new(kind, self.finder.as_ref(), generator)
    }

    /// Create the set unless it exists already
    ///
    /// Returns [`Outcome::Failed`] with [`FailureReason::AlreadyExists`] and
    /// leaves storage untouched when the set is present.
    pub async fn request_create(&self, kind: DemoContentKind) -> Result<Outcome, DemoError> {
        let set = self.set(kind);
        if set.exists().await? {
            tracing::info!(set = %kind, "Demo content exists already, refusing to create it");
            return Ok(Outcome::Failed(FailureReason::AlreadyExists));
        }

        set.create().await?;
        tracing::info!(set = %kind, "Demo content created");
        Ok(Outcome::Ok)
    }

    /// Delete the set, whether or not it exists
    pub async fn request_delete(&self, kind: DemoContentKind) -> Result<Outcome, DemoError> {
        self.set(kind).delete().await?;
        tracing::info!(set = %kind, "Demo content deleted");
        Ok(Outcome::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{MockContentGenerator, MockRecordFinder};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory content set: present or not, plus a creation counter
    #[derive(Default)]
    struct FakeContent {
        present: AtomicBool,
        creates: AtomicUsize,
        deletes: AtomicUsize,
    }

    #[async_trait]
    impl ContentGenerator for FakeContent {
        async fn create(&self) -> Result<(), DemoError> {
            self.present.store(true, Ordering::SeqCst);
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete(&self) -> Result<(), DemoError> {
            self.present.store(false, Ordering::SeqCst);
            self.deletes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FakeFinder {
        tca: Arc<FakeContent>,
        frontend: Arc<FakeContent>,
    }

    #[async_trait]
    impl RecordFinder for FakeFinder {
        async fn find_uids_of_styleguide_entry_pages(&self) -> Result<Vec<i64>, DemoError> {
            Ok(if self.tca.present.load(Ordering::SeqCst) {
                vec![1]
            } else {
                vec![]
            })
        }

        async fn find_uids_of_frontend_pages(&self) -> Result<Vec<i64>, DemoError> {
            Ok(if self.frontend.present.load(Ordering::SeqCst) {
                vec![10, 11, 12]
            } else {
                vec![]
            })
        }
    }

    fn fake_guard() -> (ExistenceGuard, Arc<FakeContent>, Arc<FakeContent>) {
        let tca = Arc::new(FakeContent::default());
        let frontend = Arc::new(FakeContent::default());
        let finder = Arc::new(FakeFinder {
            tca: Arc::clone(&tca),
            frontend: Arc::clone(&frontend),
        });
        let guard = ExistenceGuard::new(finder, tca.clone(), frontend.clone());
        (guard, tca, frontend)
    }

    #[tokio::test]
    async fn test_create_when_absent() {
        let (guard, tca, _) = fake_guard();

        let outcome = guard.request_create(DemoContentKind::Tca).await.unwrap();

        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(
            guard.set(DemoContentKind::Tca).state().await.unwrap(),
            ContentState::Present
        );
        assert_eq!(tca.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_when_present_is_refused() {
        let (guard, _, frontend) = fake_guard();
        frontend.present.store(true, Ordering::SeqCst);

        let outcome = guard.request_create(DemoContentKind::Frontend).await.unwrap();

        assert_eq!(outcome, Outcome::Failed(FailureReason::AlreadyExists));
        assert_eq!(
            guard.set(DemoContentKind::Frontend).state().await.unwrap(),
            ContentState::Present
        );
        assert_eq!(frontend.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_from_any_state() {
        let (guard, tca, _) = fake_guard();

        for initially_present in [true, false] {
            tca.present.store(initially_present, Ordering::SeqCst);
            let outcome = guard.request_delete(DemoContentKind::Tca).await.unwrap();
            assert_eq!(outcome, Outcome::Ok);
            assert_eq!(
                guard.set(DemoContentKind::Tca).state().await.unwrap(),
                ContentState::Absent
            );
        }
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (guard, _, frontend) = fake_guard();
        frontend.present.store(true, Ordering::SeqCst);

        assert_eq!(
            guard.request_delete(DemoContentKind::Frontend).await.unwrap(),
            Outcome::Ok
        );
        assert_eq!(
            guard.request_delete(DemoContentKind::Frontend).await.unwrap(),
            Outcome::Ok
        );
        assert!(!guard.set(DemoContentKind::Frontend).exists().await.unwrap());
        assert_eq!(frontend.deletes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_create_create_delete_scenario() {
        let (guard, tca, frontend) = fake_guard();
        let set = DemoContentKind::Tca;

        assert_eq!(guard.set(set).state().await.unwrap(), ContentState::Absent);

        assert_eq!(guard.request_create(set).await.unwrap(), Outcome::Ok);
        assert_eq!(guard.set(set).state().await.unwrap(), ContentState::Present);

        assert_eq!(
            guard.request_create(set).await.unwrap(),
            Outcome::Failed(FailureReason::AlreadyExists)
        );
        assert_eq!(guard.set(set).state().await.unwrap(), ContentState::Present);

        assert_eq!(guard.request_delete(set).await.unwrap(), Outcome::Ok);
        assert_eq!(guard.set(set).state().await.unwrap(), ContentState::Absent);

        assert_eq!(tca.creates.load(Ordering::SeqCst), 1);
        // The other set is never touched
        assert_eq!(frontend.creates.load(Ordering::SeqCst), 0);
        assert_eq!(frontend.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_present_set_never_reaches_generator() {
        let mut finder = MockRecordFinder::new();
        finder
            .expect_find_uids_of_styleguide_entry_pages()
            .times(1)
            .returning(|| Ok(vec![42]));

        let mut tca = MockContentGenerator::new();
        tca.expect_create().times(0);

        let guard = ExistenceGuard::new(
            Arc::new(finder),
            Arc::new(tca),
            Arc::new(MockContentGenerator::new()),
        );

        let outcome = guard.request_create(DemoContentKind::Tca).await.unwrap();
        assert_eq!(outcome, Outcome::Failed(FailureReason::AlreadyExists));
    }

    #[tokio::test]
    async fn test_delete_skips_existence_check() {
        // No expectations on the finder: any call would panic
        let finder = MockRecordFinder::new();

        let mut frontend = MockContentGenerator::new();
        frontend.expect_delete().times(1).returning(|| Ok(()));

        let guard = ExistenceGuard::new(
            Arc::new(finder),
            Arc::new(MockContentGenerator::new()),
            Arc::new(frontend),
        );

        let outcome = guard.request_delete(DemoContentKind::Frontend).await.unwrap();
        assert_eq!(outcome, Outcome::Ok);
    }

    #[tokio::test]
    async fn test_lookup_errors_propagate() {
        let mut finder = MockRecordFinder::new();
        finder
            .expect_find_uids_of_frontend_pages()
            .returning(|| Err(DemoError::Generator("storage offline".to_string())));

        let mut frontend = MockContentGenerator::new();
        frontend.expect_create().times(0);

        let guard = ExistenceGuard::new(
            Arc::new(finder),
            Arc::new(MockContentGenerator::new()),
            Arc::new(frontend),
        );

        let err = guard
            .request_create(DemoContentKind::Frontend)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("storage offline"));
    }

    #[tokio::test]
    async fn test_generator_errors_propagate() {
        let mut finder = MockRecordFinder::new();
        finder
            .expect_find_uids_of_styleguide_entry_pages()
            .returning(|| Ok(vec![]));

        let mut tca = MockContentGenerator::new();
        tca.expect_create()
            .times(1)
            .returning(|| Err(DemoError::Generator("insert failed".to_string())));

        let guard = ExistenceGuard::new(
            Arc::new(finder),
            Arc::new(tca),
            Arc::new(MockContentGenerator::new()),
        );

        assert!(guard.request_create(DemoContentKind::Tca).await.is_err());
    }
}
