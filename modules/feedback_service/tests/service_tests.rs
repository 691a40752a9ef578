//! Service tests over in-memory mock repositories

use feedback_service::contract::*;
use feedback_service::domain::repository::{FeedbackRepository, RoleRepository, UserRepository};
use feedback_service::domain::Service;
use feedback_service::FeedbackServiceModule;
use std::sync::Arc;

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct MockRoleRepo {
        data: RwLock<BTreeMap<i32, Role>>,
    }

    #[async_trait]
    impl RoleRepository for MockRoleRepo {
        async fn create(&self, new_role: &NewRole) -> anyhow::Result<Role> {
            let mut data = self.data.write();
            let id = new_role
                .id
                .unwrap_or_else(|| data.keys().next_back().map_or(1, |k| k + 1));
            let now = Utc::now();
            let role = Role {
                id,
                name: new_role.name.clone(),
                created_at: now,
                updated_at: now,
            };
            data.insert(id, role.clone());
            Ok(role)
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Role>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn rename(&self, id: i32, name: &str) -> anyhow::Result<Option<Role>> {
            Ok(self.data.write().get_mut(&id).map(|role| {
                role.name = name.to_string();
                role.updated_at = Utc::now();
                role.clone()
            }))
        }

        async fn delete(&self, id: i32) -> anyhow::Result<bool> {
            Ok(self.data.write().remove(&id).is_some())
        }
    }

    /// Counts writes so tests can assert validation stops before storage
    #[derive(Default)]
    pub struct MockUserRepo {
        data: RwLock<BTreeMap<i32, User>>,
        writes: AtomicUsize,
    }

    impl MockUserRepo {
        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn create(&self, new_user: &NewUser) -> anyhow::Result<User> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut data = self.data.write();
            let id = data.keys().next_back().map_or(1, |k| k + 1);
            let now = Utc::now();
            let user = User {
                id,
                username: new_user.username.clone(),
                email: new_user.email.clone(),
                password: new_user.password.clone(),
                is_active: new_user.is_active.unwrap_or(true),
                role_id: new_user.role_id.unwrap_or(DEFAULT_ROLE_ID),
                created_at: now,
                updated_at: now,
            };
            data.insert(id, user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
            Ok(self.data.read().get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
            Ok(self
                .data
                .read()
                .values()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
            Ok(self.data.read().values().find(|u| u.email == email).cloned())
        }

        async fn update(&self, id: i32, patch: &UserPatch) -> anyhow::Result<Option<User>> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.data.write().get_mut(&id).map(|user| {
                if let Some(username) = &patch.username {
                    user.username = username.clone();
                }
                if let Some(email) = &patch.email {
                    user.email = email.clone();
                }
                if let Some(is_active) = patch.is_active {
                    user.is_active = is_active;
                }
                if let Some(role_id) = patch.role_id {
                    user.role_id = role_id;
                }
                user.updated_at = Utc::now();
                user.clone()
            }))
        }

        async fn delete(&self, id: i32) -> anyhow::Result<bool> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.data.write().remove(&id).is_some())
        }
    }

    #[derive(Default)]
    pub struct MockFeedbackRepo {
        data: RwLock<Vec<Feedback>>,
    }

    #[async_trait]
    impl FeedbackRepository for MockFeedbackRepo {
        async fn create(&self, new_feedback: &NewFeedback) -> anyhow::Result<Feedback> {
            let mut data = self.data.write();
            let feedback = Feedback {
                id: data.len() as i32 + 1,
                content: new_feedback.content.clone(),
                feedback_type: new_feedback.feedback_type,
                created_at: Utc::now(),
            };
            data.push(feedback.clone());
            Ok(feedback)
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Feedback>> {
            Ok(self.data.read().iter().find(|f| f.id == id).cloned())
        }

        async fn list_by_type(&self, feedback_type: FeedbackType) -> anyhow::Result<Vec<Feedback>> {
            Ok(self
                .data
                .read()
                .iter()
                .filter(|f| f.feedback_type == feedback_type)
                .cloned()
                .collect())
        }
    }
}

fn create_test_service() -> (Service, Arc<mocks::MockUserRepo>) {
    let role_repo = Arc::new(mocks::MockRoleRepo::default());
    let user_repo = Arc::new(mocks::MockUserRepo::default());
    let feedback_repo = Arc::new(mocks::MockFeedbackRepo::default());
    let service = Service::new(role_repo, user_repo.clone(), feedback_repo);
    (service, user_repo)
}

#[tokio::test]
async fn test_overlong_username_never_reaches_storage() {
    let (service, user_repo) = create_test_service();

    let result = service
        .register_user(NewUser::new("x".repeat(MAX_USERNAME_LEN + 1), "a@x.com", "h1"))
        .await;

    assert!(matches!(result, Err(FeedbackError::Validation { .. })));
    assert_eq!(user_repo.writes(), 0);
}

#[tokio::test]
async fn test_overlong_email_patch_never_reaches_storage() {
    let (service, user_repo) = create_test_service();
    let user = service
        .register_user(NewUser::new("alice", "a@x.com", "h1"))
        .await
        .unwrap();

    let patch = UserPatch {
        email: Some(format!("{}@x.com", "e".repeat(MAX_EMAIL_LEN))),
        ..Default::default()
    };
    let result = service.update_user(user.id, patch).await;

    assert!(matches!(result, Err(FeedbackError::Validation { .. })));
    assert_eq!(user_repo.writes(), 1);
}

#[tokio::test]
async fn test_missing_rows_map_to_not_found() {
    let (service, _user_repo) = create_test_service();

    match service.get_user(99).await {
        Err(FeedbackError::NotFound { resource, id }) => {
            assert_eq!(resource, "user");
            assert_eq!(id, "99");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }

    assert!(matches!(
        service.update_user(99, UserPatch::default()).await,
        Err(FeedbackError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_user(99).await,
        Err(FeedbackError::NotFound { .. })
    ));
    assert!(matches!(
        service.rename_role(5, "x").await,
        Err(FeedbackError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_role(5).await,
        Err(FeedbackError::NotFound { .. })
    ));
    assert!(matches!(
        service.get_feedback(1).await,
        Err(FeedbackError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_deactivate_user() {
    let (service, _user_repo) = create_test_service();
    let user = service
        .register_user(NewUser::new("alice", "a@x.com", "h1"))
        .await
        .unwrap();
    assert!(user.is_active);

    let user = service.deactivate_user(user.id).await.unwrap();
    assert!(!user.is_active);
    assert_eq!(service.get_user(user.id).await.unwrap().is_active, false);
}

#[tokio::test]
async fn test_tagged_feedback_is_parsed_before_storage() {
    let (service, _user_repo) = create_test_service();

    assert!(matches!(
        service.submit_feedback_tagged("Suggestion", "Capitalized tag").await,
        Err(FeedbackError::InvalidFeedbackType { .. })
    ));
    assert!(service
        .list_feedback_by_type(FeedbackType::Suggestion)
        .await
        .unwrap()
        .is_empty());

    let feedback = service
        .submit_feedback_tagged("request", "More themes")
        .await
        .unwrap();
    assert_eq!(feedback.feedback_type, FeedbackType::Request);
}

#[test]
fn test_module_without_init_has_no_service() {
    let module = FeedbackServiceModule::default();
    assert!(module.service().is_err());
    assert!(module.connection().is_err());
    assert!(module.config().database.auto_migrate);
}
