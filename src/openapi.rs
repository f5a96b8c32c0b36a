use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wedding Wishes API",
        version = "1.0.0",
        description = "API for managing wedding wishes and attendance",
        license(
            name = "Apache 2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "system", description = "System endpoints"),
        (name = "wishes", description = "Wishes endpoints")
    ),
    paths(
        // System
        crate::api::system::root,
        crate::api::system::ping,
        crate::api::system::health,
        // Wishes
        crate::api::wishes::list_wishes,
        crate::api::wishes::get_wish,
        crate::api::wishes::create_wish,
        crate::api::wishes::update_wish,
        crate::api::wishes::delete_wish,
        crate::api::wishes::wish_stats,
    ),
    components(
        schemas(
            // System
            crate::models::ApiInfo,
            crate::models::ServerInfo,
            crate::models::MemoryUsage,
            crate::models::HealthReport,
            crate::models::HealthStatus,
            crate::models::ServiceReport,
            crate::models::ServiceStatus,
            // Wishes
            crate::models::Wish,
            crate::models::AttendingStatus,
            crate::models::WishRequest,
            crate::models::WishStats,
        )
    )
)]
pub struct ApiDoc;
