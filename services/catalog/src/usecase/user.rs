use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::CatalogError;

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, CatalogError> {
        self.repo.list().await
    }
}
