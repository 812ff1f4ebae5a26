//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpress_core::ports::{BlogRepository, CommentRepository, ImageHost};
use inkpress_core::{AdminAuthService, BlogService};
use inkpress_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryCommentRepository, InMemoryImageHost,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use inkpress_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use inkpress_infra::database::{PostgresBlogRepository, PostgresCommentRepository};

#[cfg(feature = "imagekit")]
use inkpress_infra::ImageKitClient;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<BlogService>,
    pub admin: Arc<AdminAuthService>,
    pub max_upload_bytes: usize,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

type Repositories = (Arc<dyn BlogRepository>, Arc<dyn CommentRepository>);

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryBlogRepository::new()),
        Arc::new(InMemoryCommentRepository::new()),
    )
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        // Initialize the document store if configured
        #[cfg(feature = "postgres")]
        let (db, (blog_repo, comment_repo)) = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repos: Repositories = (
                            Arc::new(PostgresBlogRepository::new(conn.main.clone())),
                            Arc::new(PostgresCommentRepository::new(conn.main.clone())),
                        );
                        (Some(conn), repos)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, in_memory_repositories())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, in_memory_repositories())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (blog_repo, comment_repo) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_repositories()
        };

        let images = Self::image_host(config);

        let passwords = Argon2PasswordService::new();
        let admin_credentials = config.admin.clone().filter(|admin| {
            match passwords.check_hash(&admin.password_hash) {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(
                        "ADMIN_PASSWORD_HASH is not usable: {}. Admin login is disabled.",
                        e
                    );
                    false
                }
            }
        });

        let admin = AdminAuthService::new(
            admin_credentials,
            Arc::new(passwords),
            Arc::new(JwtTokenService::new(config.jwt.clone())),
        );

        tracing::info!("Application state initialized");

        Self {
            blogs: Arc::new(BlogService::new(blog_repo, comment_repo, images)),
            admin: Arc::new(admin),
            max_upload_bytes: config.max_upload_bytes,
            #[cfg(feature = "postgres")]
            db,
        }
    }

    /// Assemble state from ready-made services, without a database handle.
    pub fn from_services(
        blogs: BlogService,
        admin: AdminAuthService,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            blogs: Arc::new(blogs),
            admin: Arc::new(admin),
            max_upload_bytes,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    #[cfg(feature = "imagekit")]
    fn image_host(config: &AppConfig) -> Arc<dyn ImageHost> {
        let Some(imagekit) = &config.imagekit else {
            tracing::warn!("ImageKit not configured. Storing uploaded images in memory.");
            return Arc::new(InMemoryImageHost::new());
        };

        match ImageKitClient::new(imagekit.clone()) {
            Ok(client) => {
                tracing::info!(endpoint = %imagekit.url_endpoint, "ImageKit image host configured");
                Arc::new(client)
            }
            Err(e) => {
                tracing::error!("Failed to build ImageKit client: {}. Using in-memory fallback.", e);
                Arc::new(InMemoryImageHost::new())
            }
        }
    }

    #[cfg(not(feature = "imagekit"))]
    fn image_host(_config: &AppConfig) -> Arc<dyn ImageHost> {
        tracing::info!("Running without imagekit feature - storing images in memory");
        Arc::new(InMemoryImageHost::new())
    }
}
