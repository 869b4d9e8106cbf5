// Export route modules
pub mod analyze;
pub mod insights;
pub mod status;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(analyze::routes(state))
        .merge(insights::routes())
        .merge(status::routes())
}
