use std::sync::Arc;

use userhub_application::{UserAppService, UserAppServiceImpl};
use userhub_infra::InMemoryUserRepository;

/// Shared handle to the user use cases, as seen by handlers.
pub type SharedUserService = Arc<dyn UserAppService>;

/// In-memory wiring (dev/test): repository + service.
pub fn build_services() -> SharedUserService {
    let repository = Arc::new(InMemoryUserRepository::new());
    Arc::new(UserAppServiceImpl::new(repository))
}
