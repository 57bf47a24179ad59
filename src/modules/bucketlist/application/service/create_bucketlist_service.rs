use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    CreateBucketlistError, CreateBucketlistUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistRepository, BucketlistResult, CreateBucketlistData,
};
use crate::shared::validation::parse_name;

pub struct CreateBucketlistService<R>
where
    R: BucketlistRepository,
{
    repository: R,
}

impl<R> CreateBucketlistService<R>
where
    R: BucketlistRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateBucketlistUseCase for CreateBucketlistService<R>
where
    R: BucketlistRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        name: &str,
    ) -> Result<BucketlistResult, CreateBucketlistError> {
        let name = parse_name(name).map_err(|e| CreateBucketlistError::InvalidName(e.to_string()))?;

        self.repository
            .create(CreateBucketlistData { owner, name })
            .await
            .map_err(|e| CreateBucketlistError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::modules::bucketlist::application::ports::outgoing::{
        BucketlistRepositoryError, UpdateBucketlistData,
    };
    use crate::modules::bucketlist::application::service::test_fixtures::bucketlist;

    #[derive(Default)]
    struct MockBucketlistRepository {
        fail: bool,
        created: Mutex<Vec<CreateBucketlistData>>,
    }

    #[async_trait]
    impl BucketlistRepository for MockBucketlistRepository {
        async fn create(
            &self,
            data: CreateBucketlistData,
        ) -> Result<BucketlistResult, BucketlistRepositoryError> {
            if self.fail {
                return Err(BucketlistRepositoryError::DatabaseError("db down".into()));
            }
            let result = bucketlist(data.owner, 1, &data.name);
            self.created.lock().unwrap().push(data);
            Ok(result)
        }

        async fn update(
            &self,
            _owner: UserId,
            _bucketlist_id: i32,
            _data: UpdateBucketlistData,
        ) -> Result<BucketlistResult, BucketlistRepositoryError> {
            unimplemented!("not used in CreateBucketlistService tests")
        }

        async fn delete(
            &self,
            _owner: UserId,
            _bucketlist_id: i32,
        ) -> Result<(), BucketlistRepositoryError> {
            unimplemented!("not used in CreateBucketlistService tests")
        }
    }

    #[tokio::test]
    async fn creates_with_trimmed_name_and_caller_as_owner() {
        let service = CreateBucketlistService::new(MockBucketlistRepository::default());
        let owner = UserId::from(7);

        let result = service.execute(owner, "  Travel  ").await.unwrap();

        assert_eq!(result.name, "Travel");
        assert_eq!(result.created_by, owner);

        let created = service.repository.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].owner, owner);
        assert_eq!(created[0].name, "Travel");
    }

    #[tokio::test]
    async fn rejects_blank_name_without_touching_storage() {
        let service = CreateBucketlistService::new(MockBucketlistRepository::default());

        let result = service.execute(UserId::from(7), "   ").await;

        assert!(matches!(result, Err(CreateBucketlistError::InvalidName(_))));
        assert!(service.repository.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn maps_storage_failure_to_repository_error() {
        let service = CreateBucketlistService::new(MockBucketlistRepository {
            fail: true,
            ..Default::default()
        });

        let result = service.execute(UserId::from(7), "Travel").await;

        assert!(matches!(
            result,
            Err(CreateBucketlistError::RepositoryError(_))
        ));
    }
}
